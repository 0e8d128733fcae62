//! API route prefixes and suffixes shared by the services and their clients.
//!
//! Suffixes use axum's `{id}` capture syntax so they can be passed straight
//! to `Router::route`.

pub const BASE_PREFIX: &str = "/api/v1";
pub const ID_SUFFIX: &str = "/{id}";

/// Inventory service routes.
pub mod inventory {
    pub mod car {
        pub const PREFIX: &str = "/api/v1/cars";
        pub const CHECK_AVAILABLE_SUFFIX: &str = "/check-car-available/{id}";
        pub const GET_RESPONSE_SUFFIX: &str = "/get-car-response/{id}";
    }

    pub mod brand {
        pub const PREFIX: &str = "/api/v1/brands";
    }

    pub mod model {
        pub const PREFIX: &str = "/api/v1/models";
    }
}

/// Filter service routes.
pub mod filter {
    pub const PREFIX: &str = "/api/v1/filters";
    pub const GET_BY_BRAND_NAME_SUFFIX: &str = "/brand";
    pub const GET_BY_MODEL_NAME_SUFFIX: &str = "/model";
    pub const GET_BY_PLATE_SUFFIX: &str = "/plate";
    pub const GET_BY_MODEL_YEAR_SUFFIX: &str = "/year";
    pub const GET_BY_STATE_SUFFIX: &str = "/state";
    pub const PLATE_SEARCH_SUFFIX: &str = "/plate/search";
    pub const BRAND_SEARCH_SUFFIX: &str = "/brand/search";
    pub const MODEL_SEARCH_SUFFIX: &str = "/model/search";
}

/// Rental service routes.
pub mod rental {
    pub const PREFIX: &str = "/api/v1/rentals";
}

/// Payment service routes.
pub mod payment {
    pub const PREFIX: &str = "/api/v1/payments";
    pub const CHECK_SUFFIX: &str = "/check";
}

/// Invoice service routes.
pub mod invoice {
    pub const PREFIX: &str = "/api/v1/invoices";
}
