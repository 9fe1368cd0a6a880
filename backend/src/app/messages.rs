use common::model::record::Origin;
use common::rules::Field;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Hydrate the cached list from the record service.
    Load,
    /// A change event on one input of one form.
    Input {
        form: Origin,
        field: Field,
        value: String,
    },
    Submit(Origin),
    Edit(u64),
    CancelEdit,
    RequestDelete(u64),
    ConfirmDelete,
    DismissDelete,
    Search(String),
    SelectForm(Origin),
    DismissNotice,
}
