use crate::prediction_display::interface::PredictionDisplay;
use std::error::Error;

pub struct PredictionDisplayConsole {
    width: usize,
}

impl PredictionDisplayConsole {
    pub fn new() -> Self {
        Self { width: 32 }
    }

    fn render(&self, title: &str, lines: &[String]) -> String {
        let mut out = String::new();
        out.push_str(&format!("┌{}┐\n", "─".repeat(self.width)));
        out.push_str(&format!("│{:<width$}│\n", title, width = self.width));
        out.push_str(&format!("├{}┤\n", "─".repeat(self.width)));
        for line in lines {
            let clipped: String = line.chars().take(self.width).collect();
            out.push_str(&format!("│{:<width$}│\n", clipped, width = self.width));
        }
        out.push_str(&format!("└{}┘", "─".repeat(self.width)));
        out
    }
}

impl Default for PredictionDisplayConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl PredictionDisplay for PredictionDisplayConsole {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        Ok(())
    }

    fn show(&mut self, frame_index: usize, lines: &[String]) -> Result<(), Box<dyn Error + Send + Sync>> {
        println!("{}", self.render(&format!("frame {}", frame_index), lines));
        Ok(())
    }

    fn finish(&mut self, lines: &[String]) -> Result<(), Box<dyn Error + Send + Sync>> {
        println!("{}", self.render("clip", lines));
        Ok(())
    }
}
