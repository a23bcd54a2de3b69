use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::ListStatusField;
use crate::status::RequestStatus;

/// The eight CRUD operation kinds a resource can track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    Create,
    CreateMany,
    Read,
    ReadMany,
    Update,
    UpdateMany,
    Delete,
    DeleteMany,
}

/// Where an operation records its status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTarget {
    /// A field of the collection-wide [`ListMeta`](crate::model::ListMeta).
    List(ListStatusField),
    /// A named field in each referenced entity's metadata.
    PerId(&'static str),
}

impl Operation {
    pub const ALL: [Operation; 8] = [
        Operation::Create,
        Operation::CreateMany,
        Operation::Read,
        Operation::ReadMany,
        Operation::Update,
        Operation::UpdateMany,
        Operation::Delete,
        Operation::DeleteMany,
    ];

    pub const fn verb(self) -> &'static str {
        match self {
            Operation::Create | Operation::CreateMany => "CREATE",
            Operation::Read | Operation::ReadMany => "READ",
            Operation::Update | Operation::UpdateMany => "UPDATE",
            Operation::Delete | Operation::DeleteMany => "DELETE",
        }
    }

    pub const fn is_many(self) -> bool {
        matches!(
            self,
            Operation::CreateMany | Operation::ReadMany | Operation::UpdateMany | Operation::DeleteMany
        )
    }

    pub const fn status_target(self) -> StatusTarget {
        match self {
            Operation::Create => StatusTarget::List(ListStatusField::Create),
            Operation::CreateMany => StatusTarget::List(ListStatusField::CreateMany),
            Operation::ReadMany => StatusTarget::List(ListStatusField::Read),
            Operation::Read => StatusTarget::PerId("readStatus"),
            Operation::Update | Operation::UpdateMany => StatusTarget::PerId("updateStatus"),
            Operation::Delete | Operation::DeleteMany => StatusTarget::PerId("deleteStatus"),
        }
    }

    /// Base action type: `CREATE_BOOK` or `CREATE_MANY_BOOKS`, given the
    /// snake-cased singular and plural names.
    pub fn base_action_type(self, singular: &str, plural: &str) -> String {
        if self.is_many() {
            format!("{}_MANY_{}", self.verb(), plural)
        } else {
            format!("{}_{}", self.verb(), singular)
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Create => "create",
            Operation::CreateMany => "createMany",
            Operation::Read => "read",
            Operation::ReadMany => "readMany",
            Operation::Update => "update",
            Operation::UpdateMany => "updateMany",
            Operation::Delete => "delete",
            Operation::DeleteMany => "deleteMany",
        };
        f.write_str(name)
    }
}

/// The five lifecycle phases each operation has an action type for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    Attempt,
    Succeed,
    Fail,
    Abort,
    Reset,
}

impl Phase {
    pub const ALL: [Phase; 5] = [
        Phase::Attempt,
        Phase::Succeed,
        Phase::Fail,
        Phase::Abort,
        Phase::Reset,
    ];

    pub const fn suffix(self) -> &'static str {
        match self {
            Phase::Attempt => "",
            Phase::Succeed => "_SUCCEED",
            Phase::Fail => "_FAIL",
            Phase::Abort => "_ABORT",
            Phase::Reset => "_RESET",
        }
    }

    /// Status this phase moves the tracked field to.
    pub const fn status(self) -> RequestStatus {
        match self {
            Phase::Attempt => RequestStatus::Pending,
            Phase::Succeed => RequestStatus::Succeeded,
            Phase::Fail => RequestStatus::Failed,
            Phase::Abort => RequestStatus::Aborted,
            Phase::Reset => RequestStatus::Null,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Attempt => "attempt",
            Phase::Succeed => "succeed",
            Phase::Fail => "fail",
            Phase::Abort => "abort",
            Phase::Reset => "reset",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_names_pick_singular_or_plural() {
        assert_eq!(Operation::Update.base_action_type("BOOK", "BOOKS"), "UPDATE_BOOK");
        assert_eq!(
            Operation::DeleteMany.base_action_type("BOOK", "BOOKS"),
            "DELETE_MANY_BOOKS"
        );
    }

    #[test]
    fn read_many_is_tracked_at_list_level() {
        assert_eq!(
            Operation::ReadMany.status_target(),
            StatusTarget::List(ListStatusField::Read)
        );
        assert_eq!(Operation::Read.status_target(), StatusTarget::PerId("readStatus"));
    }
}
