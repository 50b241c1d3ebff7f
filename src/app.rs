use crate::canvas::Canvas;
use crate::controller::InteractionController;
use crate::grid::Grid;
use crate::marker::{Marker, MarkerId};
use crate::settings::Settings;
use crate::store::MarkerStore;
use crate::ui::UiState;
use clipboard::ClipboardContext;
use clipboard::ClipboardProvider;
use egui::{Color32, Context, Stroke, Ui};
use egui_extras::{Column, TableBuilder};
use tracing::{info, warn};

pub struct StarMapperApp {
    canvas: Canvas,
    grid: Grid,
    controller: InteractionController,
    settings: Settings,
    ui_state: UiState,
    clipboard: Option<ClipboardContext>,
}

/// One line per marker, in list order, for the clipboard.
pub fn format_marker_lines(markers: &[Marker]) -> String {
    markers
        .iter()
        .enumerate()
        .map(|(i, marker)| {
            format!(
                "{}. ({}, {}) => ({}, {}) {}",
                i + 1,
                marker.screen_x,
                marker.screen_y,
                marker.map_x,
                marker.map_y,
                marker.label
            )
        })
        .collect::<Vec<String>>()
        .join("\n")
}

impl StarMapperApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        let mut style = (*cc.egui_ctx.style()).clone();
        style.spacing.item_spacing = egui::vec2(10.0, 10.0);
        cc.egui_ctx.set_style(style);

        let clipboard: Option<ClipboardContext> = ClipboardProvider::new().ok();
        if clipboard.is_none() {
            warn!("clipboard unavailable, copy is disabled");
        }

        info!(grid_size = settings.grid_size, "starting star mapper");

        Self {
            canvas: Canvas::new(settings.grid_size),
            grid: Grid::new(settings.grid_size, settings.show_axes),
            controller: InteractionController::new(MarkerStore::with_default_label(
                settings.default_label.clone(),
            )),
            settings,
            ui_state: UiState::default(),
            clipboard,
        }
    }

    pub fn copy_to_clipboard(&mut self, text: String) -> bool {
        if let Some(clipboard) = &mut self.clipboard {
            clipboard.set_contents(text).is_ok()
        } else {
            false
        }
    }

    // Reload the editor whenever the current star changes underneath it
    fn sync_editor(&mut self) {
        let store = self.controller.store();
        if store.current_id() != self.ui_state.editor_id {
            if let Some(marker) = store.current() {
                self.ui_state.load_editor(marker);
            }
        }
    }

    fn select_from_list(&mut self, id: MarkerId) {
        if let Some(marker) = self.controller.on_list_select(id) {
            self.ui_state.select(marker);
        }
    }

    fn submit_editor(&mut self) {
        let Some(id) = self.ui_state.editor_id else {
            return;
        };

        let result = self.controller.on_editor_submit(
            id,
            &self.ui_state.editor_map_x,
            &self.ui_state.editor_map_y,
            &self.ui_state.editor_label,
            self.grid.get_size(),
        );
        match result {
            Ok(marker) => {
                self.ui_state.status = Some(format!(
                    "Updated {} to ({}, {})",
                    marker.label, marker.map_x, marker.map_y
                ));
                self.ui_state.load_editor(marker);
            }
            Err(err) => {
                warn!(%err, "editor update rejected");
                self.ui_state.status = Some(err.to_string());
            }
        }
    }

    // Handle hover readout and clicks on the grid
    fn handle_canvas_interactions(&mut self, response: egui::Response) {
        let view_rect = response.rect;
        let grid_size = self.grid.get_size();

        self.ui_state.pointer = response.hover_pos().and_then(|pos| {
            let (px, py) = self.canvas.screen_to_grid_pos(pos, view_rect);
            self.grid
                .contains(px, py)
                .then(|| self.controller.on_pointer_move(px, py, grid_size))
        });

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let (px, py) = self.canvas.screen_to_grid_pos(pos, view_rect);
                if self.grid.contains(px, py) {
                    let marker = self.controller.on_grid_click(px, py, grid_size);
                    self.ui_state.select(marker);
                }
            }
        }
    }

    // Draw the grid, its axes and all stars
    fn draw_canvas(&self, ui: &mut Ui) -> egui::Response {
        let desired = ui
            .available_size()
            .max(egui::Vec2::splat(self.canvas.get_size()));
        let (response, painter) = ui.allocate_painter(desired, egui::Sense::click());
        let view_rect = response.rect;
        let grid_rect = self.canvas.get_screen_rect(view_rect);

        let (bg_color, line_color, star_color, selected_color) = if self.settings.dark_mode {
            (
                Color32::from_rgb(10, 10, 30),
                Color32::WHITE,
                Color32::WHITE,
                Color32::YELLOW,
            )
        } else {
            (
                Color32::from_rgb(240, 240, 240),
                Color32::from_rgb(100, 100, 100),
                Color32::BLACK,
                Color32::from_rgb(200, 150, 0),
            )
        };
        painter.rect_filled(grid_rect, 0.0, bg_color);

        if self.grid.axes_visible() {
            let center = grid_rect.center();
            painter.line_segment(
                [
                    egui::pos2(center.x, grid_rect.min.y),
                    egui::pos2(center.x, grid_rect.max.y),
                ],
                Stroke::new(1.0, line_color),
            );
            painter.line_segment(
                [
                    egui::pos2(grid_rect.min.x, center.y),
                    egui::pos2(grid_rect.max.x, center.y),
                ],
                Stroke::new(1.0, line_color),
            );
        }

        let store = self.controller.store();
        for marker in store.markers().iter().filter(|m| !m.selected) {
            let pos = self
                .canvas
                .grid_to_screen_pos(marker.screen_x, marker.screen_y, view_rect);
            painter.circle_filled(pos, self.settings.marker_radius, star_color);
        }
        // Selected star last so it stays on top
        if let Some(marker) = store.selected() {
            let pos = self
                .canvas
                .grid_to_screen_pos(marker.screen_x, marker.screen_y, view_rect);
            painter.circle_filled(pos, self.settings.marker_radius + 1.0, selected_color);
        }

        if let Some(mouse_pos) = response.hover_pos() {
            if grid_rect.contains(mouse_pos) {
                let crosshair_color = Color32::from_rgb(255, 0, 0);
                let crosshair_size = 10.0;

                painter.line_segment(
                    [
                        egui::pos2(mouse_pos.x - crosshair_size, mouse_pos.y),
                        egui::pos2(mouse_pos.x + crosshair_size, mouse_pos.y),
                    ],
                    Stroke::new(1.0, crosshair_color),
                );
                painter.line_segment(
                    [
                        egui::pos2(mouse_pos.x, mouse_pos.y - crosshair_size),
                        egui::pos2(mouse_pos.x, mouse_pos.y + crosshair_size),
                    ],
                    Stroke::new(1.0, crosshair_color),
                );
            }
        }

        response
    }

    fn draw_star_list(&mut self, ui: &mut Ui) {
        let rows: Vec<(MarkerId, bool, String, String, String)> = self
            .controller
            .store()
            .markers()
            .iter()
            .map(|marker| {
                (
                    marker.id(),
                    marker.selected,
                    format!("({}, {})", marker.screen_x, marker.screen_y),
                    format!("({}, {})", marker.map_x, marker.map_y),
                    marker.label.clone(),
                )
            })
            .collect();

        let mut clicked: Option<MarkerId> = None;

        TableBuilder::new(ui)
            .striped(true)
            .column(Column::auto())
            .column(Column::auto())
            .column(Column::remainder())
            .header(20.0, |mut header| {
                header.col(|ui| {
                    ui.strong("Pixel");
                });
                header.col(|ui| {
                    ui.strong("Map");
                });
                header.col(|ui| {
                    ui.strong("Label");
                });
            })
            .body(|mut body| {
                for (id, selected, pixel, map, label) in rows {
                    body.row(20.0, |mut row| {
                        row.col(|ui| {
                            if ui.selectable_label(selected, pixel).clicked() {
                                clicked = Some(id);
                            }
                        });
                        row.col(|ui| {
                            if ui.selectable_label(selected, map).clicked() {
                                clicked = Some(id);
                            }
                        });
                        row.col(|ui| {
                            if ui.selectable_label(selected, label).clicked() {
                                clicked = Some(id);
                            }
                        });
                    });
                }
            });

        if let Some(id) = clicked {
            self.select_from_list(id);
        }
    }

    fn draw_editor(&mut self, ui: &mut Ui) {
        egui::Grid::new("star_editor").num_columns(2).show(ui, |ui| {
            ui.label("Label");
            ui.text_edit_singleline(&mut self.ui_state.editor_label);
            ui.end_row();

            ui.label("X");
            ui.text_edit_singleline(&mut self.ui_state.editor_map_x);
            ui.end_row();

            ui.label("Y");
            ui.text_edit_singleline(&mut self.ui_state.editor_map_y);
            ui.end_row();
        });

        let has_star = self.ui_state.editor_id.is_some();
        if ui.add_enabled(has_star, egui::Button::new("Update")).clicked() {
            self.submit_editor();
        }
    }
}

impl eframe::App for StarMapperApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        if self.settings.dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }

        self.sync_editor();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Star Mapper");
                ui.separator();
                ui.label("Current coordinates:");
                ui.monospace(self.ui_state.readout_text());
                ui.separator();
                ui.label(format!("Stars: {}", self.controller.store().len()));
                if let Some(current) = self.controller.store().current() {
                    ui.separator();
                    ui.label(format!("Selected: {}", current.label));
                }
            });
        });

        egui::SidePanel::right("stars_panel")
            .resizable(true)
            .default_width(320.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.heading("Stars");
                    ui.separator();

                    if !self.controller.store().is_empty() && ui.button("Copy All Coordinates").clicked() {
                        let text = format_marker_lines(self.controller.store().markers());
                        if !self.copy_to_clipboard(text) {
                            self.ui_state.status = Some("Clipboard unavailable".to_string());
                        }
                    }

                    self.draw_star_list(ui);

                    ui.separator();
                    ui.heading("Editor");
                    self.draw_editor(ui);

                    if let Some(status) = &self.ui_state.status {
                        ui.separator();
                        ui.label(status.as_str());
                    }

                    ui.separator();

                    ui.collapsing("Appearance", |ui| {
                        ui.checkbox(&mut self.settings.dark_mode, "Dark Mode");
                        let mut show_axes = self.grid.axes_visible();
                        if ui.checkbox(&mut show_axes, "Show Axes").changed() {
                            self.grid.set_axes_visible(show_axes);
                        }
                    });

                    ui.collapsing("Help", |ui| {
                        ui.label("• Click the grid to place a star");
                        ui.label("• Click an existing star to select it");
                        ui.label("• Click a row in the list to select that star");
                        ui.label("• Edit X, Y and Label, then press Update to move it");
                        ui.label("• Map X grows to the left, map Y grows downward");
                    });
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both().show(ui, |ui| {
                let response = self.draw_canvas(ui);
                self.handle_canvas_interactions(response);
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_marker_lines() {
        let mut store = MarkerStore::new();
        store.add_or_select_at(300, 300, 600);
        store.add_or_select_at(250, 100, 600);

        assert_eq!(
            format_marker_lines(store.markers()),
            "1. (300, 300) => (0, 0) None\n2. (250, 100) => (50, -200) None"
        );
    }

    #[test]
    fn test_format_empty() {
        assert_eq!(format_marker_lines(&[]), "");
    }
}
