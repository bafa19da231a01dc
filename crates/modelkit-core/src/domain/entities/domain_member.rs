//! Domain member entity

use modelkit_domain::NativeMember;

use crate::domain::value_objects::{Marks, Value};
use crate::error::Result;

/// A readable property exposed by a domain type
#[derive(Debug, Clone)]
pub struct DomainMember {
    name: String,
    marks: Marks,
    is_list: bool,
    view_model_id: String,
    is_heavy: bool,
    native: NativeMember,
}

impl DomainMember {
    pub(crate) fn new(
        native: NativeMember,
        is_list: bool,
        view_model_id: String,
        marks: Marks,
        is_heavy: bool,
    ) -> Self {
        Self {
            name: native.name().to_string(),
            marks,
            is_list,
            view_model_id,
            is_heavy,
            native,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn marks(&self) -> &Marks {
        &self.marks
    }

    pub fn marked_as(&self, mark: &str) -> bool {
        self.marks.has(mark)
    }

    pub fn is_list(&self) -> bool {
        self.is_list
    }

    /// Id of the domain type of the member's values
    pub fn view_model_id(&self) -> &str {
        &self.view_model_id
    }

    /// Whether fetching is expensive enough to be deferred by clients
    pub fn is_heavy(&self) -> bool {
        self.is_heavy
    }

    pub fn native(&self) -> &NativeMember {
        &self.native
    }

    /// Read the member from a target
    pub fn fetch(&self, target: &Value) -> Result<Value> {
        Ok(self.native.fetch_from(target)?)
    }
}
