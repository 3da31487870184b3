//! Drag-Sitzung: Zeiger-Capture von Press bis Release.
//!
//! Eine [`DragSession`] hat genau einen Besitzer. Die drei Phasen entsprechen
//! den Drag-Callbacks:
//!
//! - [`DragSession::begin`] (Start): genau einmal, liefert die transformierte Startposition
//! - [`DragSession::update`] (Move): null- bis mehrmals, liefert das Delta seit dem letzten Schritt
//! - [`DragSession::finish`] (Ende): genau einmal, konsumiert die Sitzung und liefert
//!   das Gesamt-Delta relativ zum Start (nicht die Summe der Inkremente)
//!
//! Da `finish` die Sitzung konsumiert, kann nach dem Ende kein Move mehr
//! gemeldet werden. Den Capture verwaltet der Besitzer
//! (`app::use_cases::movement`): höchstens eine Sitzung zur Zeit, Abbau ohne Ende.

use super::error::Result;
use super::Coords2D;
use glam::Vec2;

/// Aktive Drag-Sitzung. Wird durch [`DragSession::finish`] konsumiert.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    /// Abstand zwischen Zeiger und Element-Ursprung beim Press (Pixel)
    grab_offset: Vec2,
    /// Transformierte Startposition des Elements
    start: Coords2D,
    /// Transformierte Position nach dem letzten Move
    last: Coords2D,
}

impl DragSession {
    /// Startet eine Sitzung und liefert die transformierte Startposition.
    ///
    /// `element_origin` ist die linke obere Ecke des gezogenen Elements in
    /// Bildschirm-Pixeln; `transform` bildet Bildschirm- auf logische
    /// Koordinaten ab.
    pub fn begin<T>(pointer: Vec2, element_origin: Vec2, transform: T) -> Result<(Self, Coords2D)>
    where
        T: Fn(Vec2) -> Result<Coords2D>,
    {
        let grab_offset = pointer - element_origin;
        let start = transform(pointer - grab_offset)?;
        Ok((
            Self {
                grab_offset,
                start,
                last: start,
            },
            start,
        ))
    }

    /// Verarbeitet eine Bewegung und liefert das Delta seit dem letzten Schritt.
    pub fn update<T>(&mut self, pointer: Vec2, transform: T) -> Result<Coords2D>
    where
        T: Fn(Vec2) -> Result<Coords2D>,
    {
        let current = transform(pointer - self.grab_offset)?;
        let delta = current - self.last;
        self.last = current;
        Ok(delta)
    }

    /// Beendet die Sitzung und liefert das Gesamt-Delta seit dem Start.
    ///
    /// Die Sitzung ist danach in jedem Fall freigegeben, auch wenn die
    /// Transformation fehlschlägt.
    pub fn finish<T>(self, pointer: Vec2, transform: T) -> Result<Coords2D>
    where
        T: Fn(Vec2) -> Result<Coords2D>,
    {
        let end = transform(pointer - self.grab_offset)?;
        Ok(end - self.start)
    }

    /// Transformierte Startposition.
    pub fn start(&self) -> Coords2D {
        self.start
    }

    /// Bisher zurückgelegte Strecke (Summe der gemeldeten Inkremente).
    pub fn moved_so_far(&self) -> Coords2D {
        self.last - self.start
    }
}
