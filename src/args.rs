use bevy::prelude::*;
use clap::Parser;
use once_cell::sync::Lazy;

use crate::settings::{parse_color, FieldSettings};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// An animated sparkle-field backdrop with a text overlay.
pub struct Args {
    /// Initial window size, as width,height
    #[arg(long, default_value = "1280,720")]
    pub win: String,

    /// Smallest particle radius, in logical pixels
    #[arg(long, default_value = "0.4")]
    pub min_size: f32,
    /// Largest particle radius, in logical pixels
    #[arg(long, default_value = "1.0")]
    pub max_size: f32,
    /// Surface area (in square pixels) covered by each particle; larger means fewer particles
    #[arg(long, default_value = "1200.0")]
    pub particle_density: f32,
    /// Particle fill color, as #RRGGBB
    #[arg(long, default_value = "#FFFFFF")]
    pub particle_color: String,
    /// Backdrop color, as #RRGGBB or "transparent"
    #[arg(long, default_value = "transparent")]
    pub background: String,

    /// Overlay heading text
    #[arg(long, default_value = "Sparkles")]
    pub heading: String,
    /// Overlay subheading text
    #[arg(long, default_value = "Something amazing is on the way")]
    pub subheading: String,
}

pub static ARGS: Lazy<Args> = Lazy::new(Args::parse);

impl Args {
    /// Parses `--win`, falling back to 1280x720 on malformed input.
    pub fn window_size(&self) -> Vec2 {
        let mut parts = self.win.splitn(2, ',');
        let parsed = match (parts.next(), parts.next()) {
            (Some(w), Some(h)) => w.trim().parse::<f32>().ok().zip(h.trim().parse::<f32>().ok()),
            _ => None,
        };
        match parsed {
            Some((width, height)) => Vec2::new(width, height),
            None => {
                eprintln!("Ignoring malformed --win {:?}; expected width,height", self.win);
                Vec2::new(1280.0, 720.0)
            }
        }
    }

    pub fn background_color(&self) -> Color {
        parse_color(&self.background).unwrap_or_else(|| {
            eprintln!("Ignoring malformed --background {:?}", self.background);
            Color::NONE
        })
    }

    pub fn settings(&self) -> FieldSettings {
        FieldSettings {
            min_size: self.min_size,
            max_size: self.max_size,
            particle_density: self.particle_density,
            particle_color: parse_color(&self.particle_color).unwrap_or_else(|| {
                eprintln!("Ignoring malformed --particle-color {:?}", self.particle_color);
                Color::WHITE
            }),
        }
    }
}
