/// Supplies the user identifier attached to remote log items.
pub trait UserProvider: Send + Sync {
    fn user(&self) -> String;
}

/// Supplies the host identifier attached to remote log items.
pub trait HostProvider: Send + Sync {
    fn host(&self) -> String;
}

/// Fixed-value [`UserProvider`] standing in for a real directory lookup.
#[derive(Clone, Debug)]
pub struct StaticUser(pub String);

impl Default for StaticUser {
    fn default() -> Self {
        StaticUser("johndoe1234".to_string())
    }
}

impl UserProvider for StaticUser {
    fn user(&self) -> String {
        self.0.clone()
    }
}

/// Fixed-value [`HostProvider`] standing in for real host discovery.
#[derive(Clone, Debug)]
pub struct StaticHost(pub String);

impl Default for StaticHost {
    fn default() -> Self {
        StaticHost("127.0.0.1".to_string())
    }
}

impl HostProvider for StaticHost {
    fn host(&self) -> String {
        self.0.clone()
    }
}
