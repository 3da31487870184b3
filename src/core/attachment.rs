//! Ziehbare Geometrie-Anhänge für Punkte, Kanten und Labels.
//!
//! Ein [`Attachment`] ist eine kleine Menge von Koordinaten-Slots, die gemeinsam
//! oder einzeln verschoben werden. Punkte und Labels haben einen Slot (`x/y`),
//! Kanten zwei (`x1/y1`, `x2/y2`). Alle drei teilen sich dieselbe
//! Verschiebe-Logik.

use super::Coords2D;

/// Art des Anhangs; bestimmt die Anzahl der Koordinaten-Slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentKind {
    /// Punkt-Handle: ein Slot (Mittelpunkt)
    Point,
    /// Kante: Slot 0 = Start (`x1/y1`), Slot 1 = Ende (`x2/y2`)
    Line,
    /// Label: ein Slot (linke obere Ecke)
    Label,
}

impl AttachmentKind {
    /// Anzahl der Koordinaten-Slots dieser Art.
    pub fn slot_count(self) -> usize {
        match self {
            AttachmentKind::Point | AttachmentKind::Label => 1,
            AttachmentKind::Line => 2,
        }
    }
}

/// Slot-Index des Kanten-Starts.
pub const LINE_START: usize = 0;
/// Slot-Index des Kanten-Endes.
pub const LINE_END: usize = 1;

/// Ziehbarer Geometrie-Anhang in logischen Koordinaten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    kind: AttachmentKind,
    slots: Vec<Coords2D>,
}

impl Attachment {
    /// Erstellt einen Anhang. Passt die Slot-Anzahl nicht zur Art, ist das ein
    /// Programmierfehler und führt zum Abbruch.
    pub fn new(kind: AttachmentKind, slots: Vec<Coords2D>) -> Self {
        assert_eq!(
            slots.len(),
            kind.slot_count(),
            "{:?} erwartet {} Koordinaten-Slots",
            kind,
            kind.slot_count()
        );
        Self { kind, slots }
    }

    /// Punkt-Handle an `position`.
    pub fn point(position: Coords2D) -> Self {
        Self::new(AttachmentKind::Point, vec![position])
    }

    /// Kante von `start` nach `end`.
    pub fn line(start: Coords2D, end: Coords2D) -> Self {
        Self::new(AttachmentKind::Line, vec![start, end])
    }

    /// Label mit linker oberer Ecke `top_left`.
    pub fn label(top_left: Coords2D) -> Self {
        Self::new(AttachmentKind::Label, vec![top_left])
    }

    /// Art des Anhangs.
    pub fn kind(&self) -> AttachmentKind {
        self.kind
    }

    /// Alle Slots in Reihenfolge.
    pub fn slots(&self) -> &[Coords2D] {
        &self.slots
    }

    /// Einzelner Slot oder `None` bei ungültigem Index.
    pub fn slot(&self, slot: usize) -> Option<Coords2D> {
        self.slots.get(slot).copied()
    }

    /// Verschiebt alle Slots um `delta`.
    pub fn translate(&mut self, delta: Coords2D) {
        for slot in &mut self.slots {
            *slot += delta;
        }
    }

    /// Verschiebt einen einzelnen Slot um `delta`.
    pub fn move_slot(&mut self, slot: usize, delta: Coords2D) {
        assert!(
            slot < self.slots.len(),
            "Slot {} existiert nicht für {:?}",
            slot,
            self.kind
        );
        self.slots[slot] += delta;
    }

    /// Setzt einen einzelnen Slot auf eine absolute Position.
    pub fn set_slot(&mut self, slot: usize, position: Coords2D) {
        assert!(
            slot < self.slots.len(),
            "Slot {} existiert nicht für {:?}",
            slot,
            self.kind
        );
        self.slots[slot] = position;
    }
}
