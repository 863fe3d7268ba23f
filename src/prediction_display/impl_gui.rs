use crate::prediction_display::interface::PredictionDisplay;
use eframe::egui;
use std::error::Error;
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

#[derive(Debug, Clone, Default)]
struct Board {
    title: String,
    lines: Vec<String>,
}

#[derive(Clone)]
struct PredictionWindow {
    board: Arc<Mutex<Board>>,
}

impl eframe::App for PredictionWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let board = match self.board.lock() {
            Ok(board) => board.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        };

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(&board.title);
            ui.separator();

            for line in &board.lines {
                ui.label(egui::RichText::new(line).monospace().size(18.0));
            }
        });

        // Frames keep arriving from the stream thread.
        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}

type Launch = fn(Arc<Mutex<Board>>) -> Result<(), String>;

// Blocks until the window is closed.
fn run_window(board: Arc<Mutex<Board>>) -> Result<(), String> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 260.0])
            .with_resizable(true),
        ..Default::default()
    };

    let window = PredictionWindow { board };

    eframe::run_native(
        "Action predictions",
        options,
        Box::new(|_cc| Box::new(window)),
    )
    .map_err(|e| e.to_string())
}

pub struct PredictionDisplayGui {
    board: Arc<Mutex<Board>>,
    launch: Launch,
    window: Option<JoinHandle<Result<(), String>>>,
}

impl PredictionDisplayGui {
    pub fn new() -> Self {
        Self::with_launcher(run_window)
    }

    fn with_launcher(launch: Launch) -> Self {
        Self {
            board: Arc::new(Mutex::new(Board::default())),
            launch,
            window: None,
        }
    }

    fn set(&self, title: String, lines: &[String]) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut board = self.board.lock().map_err(|e| e.to_string())?;
        board.title = title;
        board.lines = lines.to_vec();
        Ok(())
    }

    /// Surfaces a window that already exited with an error, e.g. one that
    /// never managed to open.
    fn check_window(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        if self.window.as_ref().is_some_and(|window| window.is_finished()) {
            return self.join_window();
        }
        Ok(())
    }

    fn join_window(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        match self.window.take() {
            Some(window) => match window.join() {
                Ok(result) => result.map_err(|e| format!("prediction window failed: {}", e).into()),
                Err(_) => Err("prediction window thread panicked".into()),
            },
            None => Ok(()),
        }
    }
}

impl Default for PredictionDisplayGui {
    fn default() -> Self {
        Self::new()
    }
}

impl PredictionDisplay for PredictionDisplayGui {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let board = self.board.clone();
        let launch = self.launch;

        self.window = Some(thread::spawn(move || launch(board)));

        Ok(())
    }

    fn show(&mut self, frame_index: usize, lines: &[String]) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.check_window()?;
        self.set(format!("Frame {}", frame_index), lines)
    }

    fn finish(&mut self, lines: &[String]) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.check_window()?;
        self.set("Clip".to_string(), lines)
    }

    fn wait(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.join_window()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn closed_by_user(_board: Arc<Mutex<Board>>) -> Result<(), String> {
        Ok(())
    }

    fn no_display_server(_board: Arc<Mutex<Board>>) -> Result<(), String> {
        Err("no display server".to_string())
    }

    fn wait_until_exited(display: &PredictionDisplayGui) {
        while !display.window.as_ref().unwrap().is_finished() {
            thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_show_replaces_board() {
        let mut display = PredictionDisplayGui::with_launcher(closed_by_user);

        display.show(0, &["run: 0.500".to_string()]).unwrap();
        display.show(1, &["jump: 0.900".to_string()]).unwrap();

        let board = display.board.lock().unwrap();
        assert_eq!(board.title, "Frame 1");
        assert_eq!(board.lines, vec!["jump: 0.900".to_string()]);
    }

    #[test]
    fn test_wait_joins_window() {
        let mut display = PredictionDisplayGui::with_launcher(closed_by_user);

        display.init().unwrap();
        display.wait().unwrap();

        assert!(display.window.is_none());
    }

    #[test]
    fn test_wait_reports_launch_failure() {
        let mut display = PredictionDisplayGui::with_launcher(no_display_server);

        display.init().unwrap();
        let error = display.wait().err().unwrap();

        assert_eq!(
            error.to_string(),
            "prediction window failed: no display server"
        );
    }

    #[test]
    fn test_show_reports_launch_failure() {
        let mut display = PredictionDisplayGui::with_launcher(no_display_server);

        display.init().unwrap();
        wait_until_exited(&display);

        let error = display.show(0, &["run: 0.500".to_string()]).err().unwrap();
        assert!(error.to_string().contains("no display server"));

        // Reported once, the stream is not failed twice for the same window.
        assert!(display.wait().is_ok());
    }
}
