pub mod error;
pub mod link;
pub mod operation;
pub mod phone;
pub mod request;

pub use error::CoreError;
pub use link::{build_chat_link, validate_link_host, LaunchPlan, DEFAULT_LINK_HOST};
pub use operation::{MethodCall, MethodResponse, Operation, UnsupportedOperation, LAUNCH_WHATSAPP};
pub use phone::{
    normalize_phone, DefaultCountryCode, NormalizedPhone, DEFAULT_COUNTRY_CODE,
    DEFAULT_LOCAL_DIGITS,
};
pub use request::LaunchRequest;
