//! Lokale Koordinaten-Frames, in denen Kurven gezeichnet und getroffen werden.
//!
//! Der Host-UI schiebt beim Betreten eines Editor-Bereichs einen Frame auf den
//! `FrameStack` und nimmt ihn beim Verlassen wieder herunter. Kurven und Anker
//! bekommen den aktuellen Frame explizit übergeben.

use glam::Vec2;

/// Rechteckiger Bereich in Screen-Koordinaten (linke obere Ecke + Größe).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LocalFrame {
    /// Linke obere Ecke in Screen-Koordinaten
    pub origin: Vec2,
    /// Breite und Höhe
    pub size: Vec2,
}

impl LocalFrame {
    /// Leerer Frame im Ursprung
    pub const ZERO: Self = Self {
        origin: Vec2::ZERO,
        size: Vec2::ZERO,
    };

    pub fn new(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Lokale Position → Screen-Position.
    pub fn to_screen(&self, local: Vec2) -> Vec2 {
        local + self.origin
    }

    /// Screen-Position → lokale Position.
    pub fn to_local(&self, screen: Vec2) -> Vec2 {
        screen - self.origin
    }

    /// Prüft ob eine Screen-Position im Frame liegt (links/oben inklusiv, rechts/unten exklusiv).
    pub fn contains_screen(&self, screen: Vec2) -> bool {
        let max = self.origin + self.size;
        screen.x >= self.origin.x && screen.x < max.x && screen.y >= self.origin.y && screen.y < max.y
    }
}

/// Stapel verschachtelter Frames. Der oberste Eintrag ist der aktuelle Frame.
#[derive(Debug, Clone, Default)]
pub struct FrameStack {
    frames: Vec<LocalFrame>,
}

impl FrameStack {
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }

    /// Betritt einen neuen Frame.
    pub fn push(&mut self, frame: LocalFrame) {
        self.frames.push(frame);
    }

    /// Verlässt den aktuellen Frame.
    pub fn pop(&mut self) -> Option<LocalFrame> {
        self.frames.pop()
    }

    /// Aktueller Frame; ohne Eintrag der leere Frame im Ursprung.
    pub fn current(&self) -> LocalFrame {
        self.frames.last().copied().unwrap_or(LocalFrame::ZERO)
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Führt `f` innerhalb von `frame` aus; der Frame wird danach wieder entfernt.
    pub fn with_frame<R>(&mut self, frame: LocalFrame, f: impl FnOnce(&mut Self, LocalFrame) -> R) -> R {
        self.push(frame);
        let result = f(self, frame);
        self.pop();
        result
    }
}
