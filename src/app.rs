use eframe::egui::{self, Color32, Key, Slider};

use crate::config::SurfaceConfig;
use crate::eraser::EraserMode;
use crate::geometry::Color;
use crate::input::InputHandler;
use crate::mapper::PanDirection;
use crate::renderer::Renderer;
use crate::surface::DrawingSurface;
use crate::tools::{ToolKind, ToolSettings};

/// We derive Deserialize/Serialize so tool settings survive a restart.
/// The drawing itself is not persisted.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct PaintApp {
    settings: ToolSettings,
    config: SurfaceConfig,

    #[serde(skip)]
    surface: DrawingSurface,
    #[serde(skip)]
    input: InputHandler,
    #[serde(skip)]
    renderer: Renderer,
}

impl Default for PaintApp {
    fn default() -> Self {
        let settings = ToolSettings::default();
        let config = SurfaceConfig::default();
        Self {
            surface: DrawingSurface::new(config.clone(), settings.clone()),
            settings,
            config,
            input: InputHandler::new(),
            renderer: Renderer::new(),
        }
    }
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let Some(storage) = cc.storage else {
            return Self::default();
        };
        let Some(restored) = eframe::get_value::<Self>(storage, eframe::APP_KEY) else {
            return Self::default();
        };

        let config = match restored.config.validate() {
            Ok(()) => restored.config,
            Err(err) => {
                log::warn!("Discarding stored surface config: {err}");
                SurfaceConfig::default()
            }
        };
        let mut settings = restored.settings;
        settings.thickness = settings.stroke_thickness();
        log::info!("Restored tool settings: {settings:?}");

        Self {
            surface: DrawingSurface::new(config.clone(), settings.clone()),
            settings,
            config,
            ..Self::default()
        }
    }

    fn tools_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Tools");
        ui.separator();

        let active = self.surface.settings().tool;
        ui.horizontal_wrapped(|ui| {
            for tool in ToolKind::ALL {
                if ui.selectable_label(active == tool, tool.name()).clicked() {
                    self.surface.set_tool(tool);
                }
            }
        });

        if active == ToolKind::Eraser {
            ui.horizontal(|ui| {
                ui.label("Eraser:");
                let mode = &mut self.surface.settings_mut().eraser_mode;
                for option in EraserMode::ALL {
                    ui.radio_value(mode, option, option.name());
                }
            });
        }

        ui.separator();

        let settings = self.surface.settings_mut();
        ui.horizontal(|ui| {
            ui.label("Color:");
            let mut color = Color32::from(settings.color);
            if egui::color_picker::color_edit_button_srgba(
                ui,
                &mut color,
                egui::color_picker::Alpha::Opaque,
            )
            .changed()
            {
                settings.color = Color::from(color);
            }
        });
        ui.horizontal(|ui| {
            ui.label("Thickness:");
            ui.add(Slider::new(&mut settings.thickness, 1.0..=20.0));
        });
        ui.checkbox(&mut settings.filled, "Filled");

        ui.horizontal(|ui| {
            ui.label("Background:");
            let mut background = Color32::from(self.surface.background());
            if egui::color_picker::color_edit_button_srgba(
                ui,
                &mut background,
                egui::color_picker::Alpha::Opaque,
            )
            .changed()
            {
                self.surface.set_background(Color::from(background));
            }
        });

        ui.separator();

        ui.horizontal(|ui| {
            if ui.button("−").clicked() {
                self.surface.zoom_out();
            }
            ui.label(format!("Zoom: {:.0}%", self.surface.mapper().zoom() * 100.0));
            if ui.button("+").clicked() {
                self.surface.zoom_in();
            }
            if ui.button("Reset").clicked() {
                self.surface.reset_view();
            }
        });

        ui.label(format!("Shapes: {}", self.surface.shape_count()));
        if ui
            .add_enabled(self.surface.shape_count() > 0, egui::Button::new("Clear canvas"))
            .clicked()
        {
            self.surface.clear();
        }
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }

        ctx.input(|input| {
            if input.key_pressed(Key::Plus) || input.key_pressed(Key::Equals) {
                self.surface.zoom_in();
            }
            if input.key_pressed(Key::Minus) {
                self.surface.zoom_out();
            }
            if input.key_pressed(Key::Num0) {
                self.surface.reset_view();
            }
            for (key, direction) in [
                (Key::ArrowLeft, PanDirection::Left),
                (Key::ArrowRight, PanDirection::Right),
                (Key::ArrowUp, PanDirection::Up),
                (Key::ArrowDown, PanDirection::Down),
            ] {
                if input.key_pressed(key) {
                    self.surface.pan_step(direction);
                }
            }
        });
    }
}

impl eframe::App for PaintApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.settings = self.surface.settings().clone();
        self.config = self.surface.config().clone();
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("tools_panel")
            .resizable(false)
            .show(ctx, |ui| self.tools_panel(ui));

        self.handle_keys(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
                let rect = response.rect;

                self.surface.set_viewport(rect.size());
                for event in self.input.process_input(ctx, rect) {
                    self.surface.handle_event(&event);
                }

                self.renderer.render(&self.surface, &painter, rect);
            });
    }
}
