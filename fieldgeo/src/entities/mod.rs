mod editor;
mod field;
mod layer_registry;
mod selection;

#[doc(inline)]
pub use editor::{EditorOutcome, FieldEditor, MapEvent};
#[doc(inline)]
pub use field::{Field, FieldId};
#[doc(inline)]
pub use layer_registry::{LayerKey, LayerRegistry};
#[doc(inline)]
pub use selection::FieldSelection;
