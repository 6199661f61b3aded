//! Provider profiles.
//!
//! A provider is a target test-execution environment: a device attached to
//! the local machine, or a cloud device farm. Each variant carries its own
//! required-variable list and runner parameter template as data, so adding
//! a provider means adding a variant, not editing dispatch logic.

use crate::environment::EnvSnapshot;
use crate::errors::DispatchError;

/// Known provider names, in the order shown by `--help`.
pub const PROVIDER_NAMES: [&str; 4] = [
    "local-android",
    "bitbar-android",
    "local-ios",
    "sauce-ios",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    LocalAndroid,
    BitbarAndroid,
    LocalIos,
    SauceIos,
}

impl Provider {
    /// Resolve a provider from its CLI name. Unknown names fail fast here;
    /// nothing downstream ever sees an unvalidated provider.
    pub fn from_name(name: &str) -> Result<Self, DispatchError> {
        match name {
            "local-android" => Ok(Provider::LocalAndroid),
            "bitbar-android" => Ok(Provider::BitbarAndroid),
            "local-ios" => Ok(Provider::LocalIos),
            "sauce-ios" => Ok(Provider::SauceIos),
            other => Err(DispatchError::UnknownProvider(other.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Provider::LocalAndroid => "local-android",
            Provider::BitbarAndroid => "bitbar-android",
            Provider::LocalIos => "local-ios",
            Provider::SauceIos => "sauce-ios",
        }
    }

    /// Environment variables that must be present and non-empty before this
    /// provider can run. Order is fixed so failure reports are stable.
    pub fn required_vars(&self) -> &'static [&'static str] {
        match self {
            Provider::LocalAndroid => &[
                "LOCAL_ANDROID_DEVICE_UDID",
                "LOCAL_ANDROID_PLATFORM_VERSION",
                "APP_ACTIVITY",
                "APP_PACKAGE",
            ],
            Provider::BitbarAndroid => &[
                "BITBAR_API_KEY",
                "BITBAR_APP_ID",
                "BITBAR_DEVICE_NAME",
                "BITBAR_URL",
                "APP_ACTIVITY",
                "APP_PACKAGE",
            ],
            Provider::LocalIos => &["LOCAL_IOS_DEVICE_UDID", "BUNDLE_ID"],
            Provider::SauceIos => &[
                "SAUCE_USERNAME",
                "SAUCE_ACCESS_KEY",
                "SAUCE_DEVICE_NAME",
                "SAUCE_PLATFORM_VERSION",
                "SAUCE_URL",
                "BUNDLE_ID",
            ],
        }
    }

    /// Check every required variable against the snapshot, collecting all
    /// missing names rather than stopping at the first.
    pub fn validate(&self, env: &EnvSnapshot) -> Result<(), DispatchError> {
        let missing = env.missing(self.required_vars());
        if missing.is_empty() {
            Ok(())
        } else {
            Err(DispatchError::MissingConfiguration {
                provider: self.name(),
                missing,
            })
        }
    }

    /// Build the runner parameter list for this provider. Callers must have
    /// validated the snapshot first; assembly substitutes values verbatim.
    ///
    /// The flag names are the runner's own option contract (pytest options
    /// registered by the test framework's conftest). `run_name` labels the
    /// session on the cloud farms that support named test runs.
    pub fn runner_args(&self, env: &EnvSnapshot, run_name: &str) -> Vec<String> {
        let mut args = Vec::new();
        match self {
            Provider::LocalAndroid => {
                push_opt(&mut args, "--provider", "local");
                push_opt(&mut args, "--platform", "android");
                push_opt(&mut args, "--application_type", "mobile-native");
                push_opt(&mut args, "--device_udid", env.value("LOCAL_ANDROID_DEVICE_UDID"));
                push_opt(&mut args, "--platform_version", env.value("LOCAL_ANDROID_PLATFORM_VERSION"));
                push_opt(&mut args, "--application_launch_activity", env.value("APP_ACTIVITY"));
                push_opt(&mut args, "--application_id", env.value("APP_PACKAGE"));
            }
            Provider::BitbarAndroid => {
                push_opt(&mut args, "--provider", "bitbar");
                push_opt(&mut args, "--platform", "android");
                push_opt(&mut args, "--application_type", "mobile-native");
                push_opt(&mut args, "--url", env.value("BITBAR_URL"));
                push_opt(&mut args, "--bitbar_api_key", env.value("BITBAR_API_KEY"));
                push_opt(&mut args, "--bitbar_app_id", env.value("BITBAR_APP_ID"));
                push_opt(&mut args, "--bitbar_testrun", run_name);
                push_opt(&mut args, "--device_name", env.value("BITBAR_DEVICE_NAME"));
                push_opt(&mut args, "--application_launch_activity", env.value("APP_ACTIVITY"));
                push_opt(&mut args, "--application_id", env.value("APP_PACKAGE"));
            }
            Provider::LocalIos => {
                push_opt(&mut args, "--provider", "local");
                push_opt(&mut args, "--platform", "ios");
                push_opt(&mut args, "--application_type", "mobile-native");
                push_opt(&mut args, "--device_udid", env.value("LOCAL_IOS_DEVICE_UDID"));
                push_opt(&mut args, "--application_id", env.value("BUNDLE_ID"));
            }
            Provider::SauceIos => {
                push_opt(&mut args, "--provider", "saucelabs");
                push_opt(&mut args, "--platform", "ios");
                push_opt(&mut args, "--application_type", "mobile-native");
                push_opt(&mut args, "--url", env.value("SAUCE_URL"));
                push_opt(&mut args, "--saucelabs_username", env.value("SAUCE_USERNAME"));
                push_opt(&mut args, "--saucelabs_access_key", env.value("SAUCE_ACCESS_KEY"));
                push_opt(&mut args, "--saucelabs_name", run_name);
                push_opt(&mut args, "--device_name", env.value("SAUCE_DEVICE_NAME"));
                push_opt(&mut args, "--platform_version", env.value("SAUCE_PLATFORM_VERSION"));
                push_opt(&mut args, "--application_id", env.value("BUNDLE_ID"));
            }
        }
        args
    }
}

fn push_opt(args: &mut Vec<String>, flag: &str, value: &str) {
    args.push(flag.to_string());
    args.push(value.to_string());
}
