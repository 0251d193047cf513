use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(Uuid);

impl UserId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

/// The identity of the user acting on the current request.
#[derive(Debug, Clone)]
pub struct UserAccount {
    pub id: UserId,
}

impl UserAccount {
    pub fn new(id: UserId) -> Self {
        Self { id }
    }
}
