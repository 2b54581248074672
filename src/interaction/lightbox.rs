/// Keys the lightbox reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Escape,
    Other,
}

impl Key {
    /// Maps a DOM `KeyboardEvent.key` value.
    pub fn from_dom(key: &str) -> Self {
        match key {
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            "Escape" => Key::Escape,
            _ => Key::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxState {
    Closed,
    Open { index: usize },
}

/// Full-screen viewer over a fixed list of images.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lightbox {
    len: usize,
    state: LightboxState,
}

impl Lightbox {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            state: LightboxState::Closed,
        }
    }

    pub fn state(&self) -> LightboxState {
        self.state
    }

    pub fn current(&self) -> Option<usize> {
        match self.state {
            LightboxState::Open { index } => Some(index),
            LightboxState::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.current().is_some()
    }

    /// Opens at `index`, clamped to the last image. A lightbox without
    /// images stays closed.
    pub fn open(&mut self, index: usize) {
        if self.len == 0 {
            return;
        }
        self.state = LightboxState::Open {
            index: index.min(self.len - 1),
        };
    }

    pub fn close(&mut self) {
        self.state = LightboxState::Closed;
    }

    pub fn next(&mut self) {
        if let LightboxState::Open { index } = self.state {
            self.state = LightboxState::Open {
                index: if index + 1 >= self.len { 0 } else { index + 1 },
            };
        }
    }

    pub fn previous(&mut self) {
        if let LightboxState::Open { index } = self.state {
            self.state = LightboxState::Open {
                index: if index == 0 { self.len - 1 } else { index - 1 },
            };
        }
    }

    /// Jump to a thumbnail. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if self.is_open() && index < self.len {
            self.state = LightboxState::Open { index };
        }
    }

    pub fn handle_key(&mut self, key: Key) {
        match key {
            Key::ArrowLeft => self.previous(),
            Key::ArrowRight => self.next(),
            Key::Escape => self.close(),
            Key::Other => {}
        }
    }

    /// Navigation arrows are hidden for a single image.
    pub fn shows_navigation(&self) -> bool {
        self.len > 1
    }

    /// `"2 / 5"`
    pub fn counter_label(&self) -> Option<String> {
        self.current()
            .map(|index| format!("{} / {}", index + 1, self.len))
    }
}
