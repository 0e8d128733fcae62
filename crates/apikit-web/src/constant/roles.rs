//! Role names shared by all services.

pub const SUPER_ADMIN: &str = "superadmin";
pub const ADMIN: &str = "admin";
pub const DEVELOPER: &str = "developer";
pub const MODERATOR: &str = "moderator";
pub const CUSTOMER: &str = "customer";
pub const USER: &str = "user";
pub const GUEST: &str = "guest";
