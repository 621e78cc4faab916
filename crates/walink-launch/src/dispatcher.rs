use tracing::debug;
use walink_core::{CoreError, DefaultCountryCode, LaunchPlan, LaunchRequest, DEFAULT_LINK_HOST};

use crate::opener::Opener;

/// Application identifier tried before the OS default handler.
#[cfg(target_os = "macos")]
pub const DEFAULT_HANDLER: &str = "net.whatsapp.WhatsApp";
#[cfg(not(target_os = "macos"))]
pub const DEFAULT_HANDLER: &str = "whatsapp";

#[derive(Debug, Clone)]
pub struct DispatchSettings {
    pub default_country_code: Option<DefaultCountryCode>,
    pub link_host: String,
    /// Application identifier tried first.
    pub handler: String,
    pub fallback: bool,
}

impl Default for DispatchSettings {
    fn default() -> Self {
        Self {
            default_country_code: Some(DefaultCountryCode::default()),
            link_host: DEFAULT_LINK_HOST.to_string(),
            handler: DEFAULT_HANDLER.to_string(),
            fallback: true,
        }
    }
}

/// Opens a pre-filled chat: the preferred handler first, then whatever the
/// OS picks. Every outcome is a plain `bool`.
#[derive(Debug, Clone)]
pub struct Dispatcher<O> {
    opener: O,
    settings: DispatchSettings,
}

impl<O: Opener> Dispatcher<O> {
    pub fn new(opener: O, settings: DispatchSettings) -> Self {
        Self { opener, settings }
    }

    pub fn settings(&self) -> &DispatchSettings {
        &self.settings
    }

    pub fn opener(&self) -> &O {
        &self.opener
    }

    /// Normalizes the phone and builds the chat link without opening anything.
    pub fn plan(&self, request: &LaunchRequest) -> Result<LaunchPlan, CoreError> {
        LaunchPlan::new(
            request,
            self.settings.default_country_code.as_ref(),
            &self.settings.link_host,
        )
    }

    pub fn dispatch(&self, phone: &str, message: &str) -> bool {
        self.dispatch_request(&LaunchRequest::new(phone, message))
    }

    pub fn dispatch_request(&self, request: &LaunchRequest) -> bool {
        match self.plan(request) {
            Ok(plan) => self.launch(&plan),
            Err(err) => {
                debug!(error = %err, "launch skipped");
                false
            }
        }
    }

    /// At most two opener calls: constrained, then unconstrained.
    pub fn launch(&self, plan: &LaunchPlan) -> bool {
        let handler = self.settings.handler.as_str();
        debug!(phone = %plan.phone, handler, "opening chat");
        if self.opener.try_open(&plan.url, Some(handler)) {
            debug!(handler, "chat opened");
            return true;
        }

        if !self.settings.fallback {
            debug!("fallback disabled");
            return false;
        }

        let launched = self.opener.try_open(&plan.url, None);
        debug!(launched, "fallback finished");
        launched
    }
}
