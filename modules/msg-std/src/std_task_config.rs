
/// Configuration of a thread bound as a task.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StdTaskConfig {
  name:     Option<String>,
  priority: u8,
}

impl StdTaskConfig {
  /// Creates an unnamed configuration with priority zero.
  #[must_use]
  pub const fn new() -> Self {
    Self { name: None, priority: 0 }
  }

  /// Sets the name used in log events.
  #[must_use]
  pub fn with_name(mut self, name: impl Into<String>) -> Self {
    self.name = Some(name.into());
    self
  }

  /// Sets the wake priority; higher values are woken first.
  #[must_use]
  pub const fn with_priority(mut self, priority: u8) -> Self {
    self.priority = priority;
    self
  }

  /// Returns the task name, if set.
  #[must_use]
  pub fn name(&self) -> Option<&str> {
    self.name.as_deref()
  }

  /// Returns the wake priority.
  #[must_use]
  pub const fn priority(&self) -> u8 {
    self.priority
  }
}
