use crate::Word;


/// Per-task slot used to hand a message across a suspension.
///
/// A blocked sender stages its word here; a blocked receiver waits for a word to be
/// delivered here. The waking side reads or fills the slot under the kernel lock, so a
/// completed rendezvous never occupies a ring-buffer slot of its own.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TaskScratch {
  /// Nothing staged.
  #[default]
  Idle,
  /// A blocked sender's outgoing word.
  Sending(Word),
  /// A blocked receiver waiting for a word.
  Receiving,
  /// A word delivered to a receiver by the waking side.
  Received(Word),
}

impl TaskScratch {
  /// Takes a staged outgoing word, leaving the slot idle.
  pub const fn take_staged(&mut self) -> Option<Word> {
    match *self {
      | Self::Sending(word) => {
        *self = Self::Idle;
        Some(word)
      },
      | _ => None,
    }
  }

  /// Delivers a word to a waiting receiver.
  ///
  /// Returns `false` when the slot does not belong to a waiting receiver.
  pub const fn deliver(&mut self, word: Word) -> bool {
    match *self {
      | Self::Receiving => {
        *self = Self::Received(word);
        true
      },
      | _ => false,
    }
  }

  /// Returns the delivered word, if any.
  #[must_use]
  pub const fn received(self) -> Option<Word> {
    match self {
      | Self::Received(word) => Some(word),
      | _ => None,
    }
  }
}
