//! Closed string domains shared across entities.
//!
//! Each enum mirrors a PostgreSQL enum type from the schema. Wire values
//! (JSON and query strings) use the same snake_case spelling as the
//! database, so a single macro derives the sqlx/serde mappings plus the
//! string parsing used by list-filter handlers.

use serde::{Deserialize, Serialize};

macro_rules! define_domain_enum {
    (
        $(#[$meta:meta])*
        $name:ident ($pg_type:literal) {
            $( $(#[$vmeta:meta])* $variant:ident = $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
        #[sqlx(type_name = $pg_type, rename_all = "snake_case")]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Parse a wire value. Returns `None` for anything outside the
            /// domain; list handlers turn that into an empty result set
            /// rather than an error.
            pub fn parse(s: &str) -> Option<Self> {
                match s {
                    $( $text => Some(Self::$variant), )+
                    _ => None,
                }
            }

            /// The wire/database spelling of this variant.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $text ),+
                }
            }
        }
    };
}

define_domain_enum! {
    /// Dashboard account role.
    UserRole ("user_role") {
        Admin = "admin",
        Seller = "seller",
        Readonly = "readonly",
    }
}

define_domain_enum! {
    /// Email case lifecycle.
    EmailStatus ("email_status") {
        New = "new",
        InProgress = "in_progress",
        Replied = "replied",
        FollowUp = "follow_up",
    }
}

define_domain_enum! {
    /// Priority scale shared by email cases and waitlist requests.
    Priority ("email_priority") {
        Low = "low",
        Medium = "medium",
        High = "high",
    }
}

define_domain_enum! {
    /// Waitlist request lifecycle.
    WaitlistStatus ("waitlist_status") {
        Waiting = "waiting",
        Contacted = "contacted",
        Converted = "converted",
        Inactive = "inactive",
    }
}

define_domain_enum! {
    /// Vehicle inventory state.
    VehicleStatus ("vehicle_status") {
        Available = "available",
        Reserved = "reserved",
        Sold = "sold",
    }
}

define_domain_enum! {
    /// Vehicle fuel type.
    FuelType ("fuel_type") {
        Gasoline = "gasoline",
        Diesel = "diesel",
        Hybrid = "hybrid",
        Electric = "electric",
    }
}

define_domain_enum! {
    /// Vehicle transmission.
    Transmission ("transmission") {
        Manual = "manual",
        Automatic = "automatic",
    }
}
