use eframe::egui;
use eframe::egui::{ScrollArea, Ui};
use eframe::run_native;
use shared::grid::CellState::Alive;
use shared::patterns::PATTERNS;
use shared::World;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

const GRID_WIDTH: usize = 72;
const GRID_HEIGHT: usize = GRID_WIDTH * 9 / 16;
const CELL_SIZE: f32 = 8.0;
const TICK_INTERVAL: Duration = Duration::from_millis(50);

fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("starting with a {}x{} grid", GRID_HEIGHT, GRID_WIDTH);

    // Shared world state wrapped in Arc<Mutex<T>> for synchronization between threads
    let shared_world = Arc::new(Mutex::new(World::new(GRID_HEIGHT, GRID_WIDTH)));

    run_native(
        "Game of Life",
        eframe::NativeOptions::default(),
        Box::new(|cc| {
            // Pass the creation context and shared world to initialize the app
            let ctx = cc.egui_ctx.clone();
            let world_clone = Arc::clone(&shared_world);

            // Spawn a background thread to tick the world while it is running
            thread::spawn(move || loop {
                thread::sleep(TICK_INTERVAL);
                let mut world = world_clone.lock().unwrap();
                if world.is_running() && world.step() {
                    ctx.request_repaint();
                }
            });

            Ok(Box::new(GuiOfLife::new(cc, shared_world)))
        }),
    )
    .map_err(|err| anyhow::anyhow!("failed to run the gui: {err}"))
}

struct GuiOfLife {
    world: Arc<Mutex<World>>, // Shared simulation state
}

impl GuiOfLife {
    fn new(_cc: &eframe::CreationContext<'_>, shared_world: Arc<Mutex<World>>) -> Self {
        Self { world: shared_world }
    }

    fn controls(&mut self, ui: &mut Ui) {
        let mut world = self.world.lock().unwrap();
        ui.horizontal(|ui| {
            if ui.button("Start").clicked() {
                world.start();
            }
            if ui.button("Stop").clicked() {
                world.stop();
            }
            if ui.button("Reset").clicked() {
                world.reset();
            }
            if ui.button("Randomize").clicked() {
                world.randomize();
            }
            for pattern in PATTERNS {
                if ui.button(pattern.name).clicked() {
                    world.seed(pattern.name);
                }
            }
            ui.label(format!("Generation: {}", world.generation()));
        });
    }

    fn draw_world(&mut self, ui: &mut Ui) {
        let mut world = self.world.lock().unwrap();

        // Calculate the grid starting point, reacting to clicks
        let (rect, response) = ui.allocate_exact_size(
            egui::vec2(
                CELL_SIZE * world.grid().width() as f32,
                CELL_SIZE * world.grid().height() as f32,
            ),
            egui::Sense::click(),
        );

        // Map a click back to the cell under the pointer and toggle it
        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let row = ((pos.y - rect.min.y) / CELL_SIZE) as usize;
                let col = ((pos.x - rect.min.x) / CELL_SIZE) as usize;
                if row < world.grid().height() && col < world.grid().width() {
                    world.toggle_cell(row, col);
                }
            }
        }

        // Draw each cell at its calculated position
        for (row_index, row) in world.grid().rows().iter().enumerate() {
            for (col_index, cell) in row.iter().enumerate() {
                // Determine the position of the top-left corner of the cell
                let pos = rect.min
                    + egui::vec2(col_index as f32 * CELL_SIZE, row_index as f32 * CELL_SIZE);

                // Determine the color for the cell
                let color = if *cell == Alive {
                    egui::Color32::WHITE
                } else {
                    egui::Color32::DARK_GRAY
                };

                // Draw the cell as a filled rectangle
                let painter = ui.painter();
                painter.rect_filled(
                    egui::Rect::from_min_size(pos, egui::vec2(CELL_SIZE, CELL_SIZE)),
                    CELL_SIZE / 4f32,
                    color,
                );
            }
        }
    }
}

impl eframe::App for GuiOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::both().show(ui, |ui| {
                ui.heading("Game of Life");
                self.controls(ui);
                self.draw_world(ui);
            });
        });
    }
}
