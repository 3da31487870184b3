//! Parking Space Editor: Replay-Host.
//!
//! Spielt eine aufgezeichnete Zeiger-/Tastatur-Sitzung gegen den Editor-Kern
//! ab und gibt die resultierenden Polygone und Commit-Ereignisse als JSON aus.
//!
//! Aufruf: `parking-space-editor <sitzung.json> [polygone.json] [optionen.toml]`

use anyhow::Context;
use glam::Vec2;
use parking_space_editor::core::to_image;
use parking_space_editor::records::PointRecord;
use parking_space_editor::{
    parse_polygon_records, write_polygon_records, AppController, AppIntent, AppState,
    CommitEvent, EditMode, EditorOptions, PolygonRecord, ViewBox, ViewportRect,
};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!(
        "Parking Space Editor v{} startet...",
        env!("CARGO_PKG_VERSION")
    );

    let mut args = std::env::args().skip(1);
    let session_path = args
        .next()
        .map(PathBuf::from)
        .context("Aufruf: parking-space-editor <sitzung.json> [polygone.json] [optionen.toml]")?;
    let polygons_path = args.next().map(PathBuf::from);
    let options_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(EditorOptions::config_path);

    let options = EditorOptions::load_from_file(&options_path);
    if !options_path.exists() {
        // Vorlage zum Anpassen anlegen; ein Fehler hier bricht das Replay nicht ab
        if let Err(e) = options.save_to_file(&options_path) {
            log::warn!("Optionen-Vorlage nicht geschrieben: {:#}", e);
        }
    }
    let session = load_session(&session_path)?;
    let report = Replay::new(options).run(polygons_path.as_deref(), session)?;

    println!(
        "{}",
        serde_json::to_string_pretty(&report).context("Ergebnis nicht serialisierbar")?
    );
    Ok(())
}

/// Aufgezeichnete Sitzung.
#[derive(Debug, Deserialize)]
struct Session {
    /// Größe des Videobilds; wenn gesetzt, werden die Polygone zusätzlich
    /// in Bildpixeln ausgegeben
    #[serde(default)]
    image_size: Option<[f32; 2]>,
    steps: Vec<Step>,
}

/// Ein Schritt der Sitzung (Bildschirm-Pixel).
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum Step {
    Viewport {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    ViewBox {
        value: String,
    },
    Press {
        x: f32,
        y: f32,
    },
    Move {
        x: f32,
        y: f32,
    },
    Release {
        x: f32,
        y: f32,
    },
    DoubleClick {
        x: f32,
        y: f32,
    },
    ModeButton {
        mode: EditMode,
    },
    Key {
        key: String,
    },
    SetMode {
        mode: EditMode,
    },
    ConfirmLabel {
        text: String,
    },
    CancelLabel,
    Load {
        path: PathBuf,
    },
}

impl Step {
    fn into_intent(self) -> anyhow::Result<AppIntent> {
        let intent = match self {
            Step::Viewport {
                x,
                y,
                width,
                height,
            } => AppIntent::ViewportChanged {
                viewport: ViewportRect::new(x, y, width, height),
            },
            Step::ViewBox { value } => AppIntent::ViewBoxChanged {
                view_box: value.parse::<ViewBox>()?,
            },
            Step::Press { x, y } => AppIntent::PointerPressed {
                screen_pos: Vec2::new(x, y),
            },
            Step::Move { x, y } => AppIntent::PointerMoved {
                screen_pos: Vec2::new(x, y),
            },
            Step::Release { x, y } => AppIntent::PointerReleased {
                screen_pos: Vec2::new(x, y),
            },
            Step::DoubleClick { x, y } => AppIntent::DoubleClicked {
                screen_pos: Vec2::new(x, y),
            },
            Step::ModeButton { mode } => AppIntent::ModeButtonClicked { mode },
            Step::Key { key } => AppIntent::ModeShortcutPressed { key },
            Step::SetMode { mode } => AppIntent::SetModeRequested { mode },
            Step::ConfirmLabel { text } => AppIntent::LabelEditConfirmed { text },
            Step::CancelLabel => AppIntent::LabelEditCancelled,
            Step::Load { path } => AppIntent::PolygonsLoaded {
                records: load_records(&path)?,
            },
        };
        Ok(intent)
    }
}

/// Ausgabe eines Replays.
#[derive(Debug, Serialize)]
struct Report {
    mode: EditMode,
    polygons: Vec<PolygonRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_polygons: Option<Vec<PolygonRecord>>,
    commits: Vec<CommitEvent>,
    rejected_steps: usize,
}

struct Replay {
    state: AppState,
    controller: AppController,
    commits: Rc<RefCell<Vec<CommitEvent>>>,
}

impl Replay {
    fn new(options: EditorOptions) -> Self {
        let commits = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&commits);
        let controller = AppController::with_sink(move |event: &CommitEvent| {
            sink.borrow_mut().push(event.clone());
        });
        Self {
            state: AppState::with_options(options),
            controller,
            commits,
        }
    }

    fn run(mut self, polygons_path: Option<&Path>, session: Session) -> anyhow::Result<Report> {
        if let Some(path) = polygons_path {
            let records = load_records(path)?;
            self.controller
                .handle_intent(&mut self.state, AppIntent::PolygonsLoaded { records })?;
            // Initiales Laden ist kein Benutzer-Commit
            self.commits.borrow_mut().clear();
        }

        let mut rejected_steps = 0;
        for (index, step) in session.steps.into_iter().enumerate() {
            let result = step
                .into_intent()
                .and_then(|intent| self.controller.handle_intent(&mut self.state, intent));
            if let Err(e) = result {
                log::warn!("Schritt {} abgelehnt: {:#}", index, e);
                rejected_steps += 1;
            }
        }

        let image_polygons = session
            .image_size
            .map(|[w, h]| self.image_polygons(Vec2::new(w, h)))
            .transpose()?;

        let polygons = self.state.polygon_records();
        log::info!(
            "Replay beendet: {} Polygone, {} Schritte abgelehnt",
            polygons.len(),
            rejected_steps
        );
        log::debug!("Polygone:\n{}", write_polygon_records(&polygons)?);

        Ok(Report {
            mode: self.state.editor.edit_mode,
            polygons,
            image_polygons,
            commits: self.commits.take(),
            rejected_steps,
        })
    }

    /// Abgeschlossene Polygone in Pixeln des Videobilds.
    fn image_polygons(&self, image_size: Vec2) -> anyhow::Result<Vec<PolygonRecord>> {
        let view_box = &self.state.view.view_box;
        self.state
            .editor
            .committed()
            .map(|polygon| {
                let points = polygon
                    .points
                    .iter()
                    .map(|p| {
                        let px = to_image(p.position, view_box, image_size)?;
                        Ok(PointRecord {
                            x: f64::from(px.x),
                            y: f64::from(px.y),
                        })
                    })
                    .collect::<anyhow::Result<Vec<_>>>()?;
                Ok(PolygonRecord {
                    id: polygon.id,
                    label: polygon.label.clone(),
                    points,
                })
            })
            .collect()
    }
}

fn load_session(path: &Path) -> anyhow::Result<Session> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Sitzung {} nicht lesbar", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Sitzung {} ungültig", path.display()))
}

fn load_records(path: &Path) -> anyhow::Result<Vec<PolygonRecord>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Polygon-Datei {} nicht lesbar", path.display()))?;
    parse_polygon_records(&content)
}
