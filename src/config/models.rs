use serde_derive::Deserialize;

// When adding fields with underscores here, add
// #[serde(alias = "ihavenounderscores")]
// so they can still be read from the ENV vars.

/// Program names (or paths) of the CUPS command line tools.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Tools {
    pub lpstat: String,
    pub lpoptions: String,
    pub lp: String,
    pub cancel: String,
}

impl Default for Tools {
    fn default() -> Self {
        Tools {
            lpstat: "lpstat".to_string(),
            lpoptions: "lpoptions".to_string(),
            lp: "lp".to_string(),
            cancel: "cancel".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub tools: Tools,
}
