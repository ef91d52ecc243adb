/// Identity read out of the stored JWT
///
/// Only the `_id` claim matters here; every other claim is ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct Identity {
    pub user_id: String,
}
