/// Fixed sample themes the front-end offers as one-click input.
pub const SAMPLE_THEMES: [&str; 8] = [
    "sunset", "ocean", "dream", "hope", "love", "rain", "spring", "joy",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenerationStatus {
    Idle,
    InProgress,
    Done,
}

/// Mutable per-session state the presentation layer renders from.
/// After a generic failure both `haiku` and `error` are populated;
/// the banner and the fallback haiku are shown together.
#[derive(Debug)]
pub struct HaikuSession {
    pub theme: String,
    pub haiku: Option<String>,
    pub error: Option<String>,
    pub status: GenerationStatus,
    pub info_visible: bool,
}

impl HaikuSession {
    pub fn new() -> Self {
        Self {
            theme: String::new(),
            haiku: None,
            error: None,
            status: GenerationStatus::Idle,
            info_visible: false,
        }
    }

    /// The front-end refuses new submissions while this holds.
    pub fn is_busy(&self) -> bool {
        self.status == GenerationStatus::InProgress
    }

    /// Sample words populate the input and clear any stale error;
    /// they never trigger generation on their own.
    pub fn apply_sample(&mut self, word: &str) {
        self.theme = word.to_string();
        self.error = None;
    }

    pub fn toggle_info(&mut self) {
        self.info_visible = !self.info_visible;
    }
}

impl Default for HaikuSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Holds the status at `InProgress` and releases it to `Done` when
/// dropped, whatever path the attempt takes out.
pub struct BusyGuard<'a> {
    status: &'a mut GenerationStatus,
}

impl<'a> BusyGuard<'a> {
    pub fn acquire(status: &'a mut GenerationStatus) -> Self {
        *status = GenerationStatus::InProgress;
        Self { status }
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        *self.status = GenerationStatus::Done;
    }
}
