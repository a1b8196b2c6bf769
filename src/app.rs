//! egui front end: catalog view and detail view

use eframe::egui;
use log::{info, warn};
use std::process::{Child, Command, Stdio};

use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::filter::{filter_movies, parse_min_rating, selector_options, FilterCriteria, Selector};
use crate::models::{option_label, Movie, GENRE_OPTIONS, LANGUAGE_OPTIONS};
use crate::router::{self, DetailOutcome, Navigator, Route, View};

const CARD_WIDTH: f32 = 260.0;

/// Filter inputs owned by the catalog view. Dropped when the view unmounts.
#[derive(Debug, Default)]
struct CatalogViewState {
    criteria: FilterCriteria,
    // Raw text of the rating box; `criteria.min_rating` is its parsed value
    rating_input: String,
}

/// Things the user asked for during this frame, applied after rendering
enum UiAction {
    OpenDetail(u32),
    Back,
    Home,
    Watch(String),
}

pub struct MovieApp {
    catalog: Catalog,
    navigator: Navigator,
    catalog_state: Option<CatalogViewState>,
    language_options: Vec<(String, String)>,
    genre_options: Vec<(String, String)>,
    config: AppConfig,
    dark_mode: bool,
    current_player: Option<Child>,
}

impl MovieApp {
    pub fn new(catalog: Catalog, config: AppConfig, initial: Route) -> Self {
        let language_options = selector_options(LANGUAGE_OPTIONS, &catalog.languages());
        let genre_options = selector_options(GENRE_OPTIONS, &catalog.genres());

        Self {
            catalog,
            navigator: Navigator::new(initial),
            catalog_state: None,
            language_options,
            genre_options,
            dark_mode: config.dark_mode,
            config,
            current_player: None,
        }
    }

    /// Mount the catalog view's filter state on entry; drop it while a detail view is shown
    fn sync_view_state(&mut self) {
        match self.navigator.current() {
            Route::Catalog => {
                self.catalog_state.get_or_insert_with(CatalogViewState::default);
            }
            Route::Detail(_) => self.catalog_state = None,
        }
    }

    fn apply(&mut self, ctx: &egui::Context, action: UiAction) {
        match action {
            UiAction::OpenDetail(id) => self.navigator.open_detail(id.to_string()),
            UiAction::Back => {
                self.navigator.back();
            }
            UiAction::Home => self.navigator.go_home(),
            UiAction::Watch(url) => self.watch(ctx, &url),
        }
    }

    /// Play in the configured external player, else open the stream in the browser
    fn watch(&mut self, ctx: &egui::Context, url: &str) {
        if self.config.has_external_player() {
            // Only one player at a time
            if let Some(mut child) = self.current_player.take() {
                let _ = child.kill();
                let _ = child.wait();
            }

            let player = self.config.external_player.trim();
            match Command::new(player)
                .arg(url)
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn()
            {
                Ok(child) => {
                    info!("Started {} for {}", player, url);
                    self.current_player = Some(child);
                    return;
                }
                Err(e) => warn!("Failed to start player {}: {}", player, e),
            }
        }

        ctx.open_url(egui::OpenUrl::new_tab(url));
    }

    fn show_top_bar(&mut self, ctx: &egui::Context) -> Option<UiAction> {
        let mut action = None;

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("🏠 Home").clicked() {
                    action = Some(UiAction::Home);
                }
                if self.navigator.can_go_back() && ui.button("⬅ Back").clicked() {
                    action = Some(UiAction::Back);
                }

                ui.separator();
                ui.label(egui::RichText::new(self.navigator.current().path()).monospace());

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.checkbox(&mut self.dark_mode, "Dark mode").changed() {
                        ctx.set_visuals(if self.dark_mode {
                            egui::Visuals::dark()
                        } else {
                            egui::Visuals::light()
                        });
                        self.config.dark_mode = self.dark_mode;
                        self.config.save();
                    }
                });
            });
        });

        action
    }
}

impl eframe::App for MovieApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut action = self.show_top_bar(ctx);
        self.sync_view_state();

        egui::CentralPanel::default().show(ctx, |ui| {
            let view_action = match router::resolve(&self.catalog, self.navigator.current()) {
                View::Catalog => {
                    let state = self.catalog_state.get_or_insert_with(CatalogViewState::default);
                    show_catalog_view(
                        ui,
                        &self.catalog,
                        &self.language_options,
                        &self.genre_options,
                        state,
                    )
                }
                View::Detail(outcome) => show_detail_view(ui, outcome),
            };
            if view_action.is_some() {
                action = view_action;
            }
        });

        if let Some(action) = action {
            self.apply(ctx, action);
        }
    }
}

impl Drop for MovieApp {
    fn drop(&mut self) {
        if let Some(mut child) = self.current_player.take() {
            let _ = child.kill();
        }
    }
}

fn selector_combo(
    ui: &mut egui::Ui,
    id: &str,
    options: &[(String, String)],
    current: &Selector,
) -> Option<Selector> {
    let mut selected = current.as_str().to_string();
    let selected_label = options
        .iter()
        .find(|(code, _)| *code == selected)
        .map(|(_, label)| label.clone())
        .unwrap_or_else(|| selected.clone());

    egui::ComboBox::from_id_salt(id)
        .selected_text(selected_label)
        .width(110.0)
        .show_ui(ui, |ui| {
            for (code, label) in options {
                ui.selectable_value(&mut selected, code.clone(), label.as_str());
            }
        });

    (selected != current.as_str()).then(|| Selector::parse(&selected))
}

fn show_catalog_view(
    ui: &mut egui::Ui,
    catalog: &Catalog,
    language_options: &[(String, String)],
    genre_options: &[(String, String)],
    state: &mut CatalogViewState,
) -> Option<UiAction> {
    ui.vertical_centered(|ui| {
        ui.heading(egui::RichText::new("Movie App").size(28.0).strong());
    });
    ui.add_space(8.0);

    ui.horizontal_wrapped(|ui| {
        let mut title = state.criteria.title.clone();
        if ui
            .add(egui::TextEdit::singleline(&mut title).hint_text("Search by title").desired_width(180.0))
            .changed()
        {
            state.criteria = std::mem::take(&mut state.criteria).with_title(title);
        }

        if ui
            .add(egui::TextEdit::singleline(&mut state.rating_input).hint_text("Minimum rating").desired_width(110.0))
            .changed()
        {
            let min_rating = parse_min_rating(&state.rating_input);
            state.criteria = std::mem::take(&mut state.criteria).with_min_rating(min_rating);
        }

        if let Some(language) = selector_combo(ui, "language_filter", language_options, &state.criteria.language) {
            state.criteria = std::mem::take(&mut state.criteria).with_language(language);
        }
        if let Some(genre) = selector_combo(ui, "genre_filter", genre_options, &state.criteria.genre) {
            state.criteria = std::mem::take(&mut state.criteria).with_genre(genre);
        }

        if (!state.criteria.is_default() || !state.rating_input.is_empty()) && ui.button("✖ Clear").clicked() {
            *state = CatalogViewState::default();
        }
    });

    let movies = filter_movies(catalog.movies(), &state.criteria);

    ui.label(
        egui::RichText::new(format!("{} of {} movies", movies.len(), catalog.len()))
            .color(egui::Color32::GRAY),
    );
    ui.separator();

    if movies.is_empty() {
        ui.vertical_centered(|ui| {
            ui.add_space(20.0);
            ui.label(if catalog.is_empty() {
                "The catalog is empty."
            } else {
                "No movies match these filters."
            });
        });
        return None;
    }

    let mut action = None;
    let columns = ((ui.available_width() / CARD_WIDTH) as usize).max(1);

    egui::ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
        egui::Grid::new("movie_grid")
            .num_columns(columns)
            .spacing([12.0, 12.0])
            .show(ui, |ui| {
                for row in movies.chunks(columns) {
                    for movie in row {
                        if show_movie_card(ui, movie) {
                            action = Some(UiAction::OpenDetail(movie.id));
                        }
                    }
                    ui.end_row();
                }
            });
    });

    action
}

/// Returns true when the card's "Watch Now" was clicked
fn show_movie_card(ui: &mut egui::Ui, movie: &Movie) -> bool {
    let mut clicked = false;

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(CARD_WIDTH - 24.0);
        ui.vertical(|ui| {
            ui.label(egui::RichText::new(movie.title.as_str()).size(18.0).strong());
            if !movie.image_url.is_empty() {
                ui.hyperlink_to("🖼 Poster", &movie.image_url);
            }
            ui.label(egui::RichText::new(movie.rating_label()).color(egui::Color32::GRAY));
            if !movie.description.is_empty() {
                ui.add(egui::Label::new(movie.description.as_str()).wrap());
            }
            if ui.link("▶ Watch Now").on_hover_text(movie.detail_path()).clicked() {
                clicked = true;
            }
        });
    });

    clicked
}

fn show_detail_view(ui: &mut egui::Ui, outcome: DetailOutcome<'_>) -> Option<UiAction> {
    let mut action = None;

    let movie = match outcome {
        DetailOutcome::Found(movie) => movie,
        DetailOutcome::NotFound => {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.heading("Movie not found!");
                ui.add_space(12.0);
                if ui.link("Back to Movie List").clicked() {
                    action = Some(UiAction::Back);
                }
            });
            return action;
        }
    };

    egui::ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
        ui.set_max_width(800.0);

        ui.label(egui::RichText::new(movie.title.as_str()).size(32.0).strong());
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(movie.rating_label()).color(egui::Color32::GOLD).strong());
            ui.separator();
            ui.label(
                egui::RichText::new(format!(
                    "{} | {}",
                    option_label(LANGUAGE_OPTIONS, &movie.language),
                    option_label(GENRE_OPTIONS, &movie.genre)
                ))
                .color(egui::Color32::GRAY),
            )
            .on_hover_text(movie.tag_line());
        });

        if !movie.image_url.is_empty() {
            ui.hyperlink_to("🖼 Poster", &movie.image_url);
        }

        ui.add_space(8.0);
        ui.add(egui::Label::new(movie.description.as_str()).wrap());
        ui.add_space(12.0);

        let watch = egui::Button::new(egui::RichText::new("▶ Watch Now").size(16.0).color(egui::Color32::WHITE))
            .fill(egui::Color32::from_rgb(220, 38, 38));
        if ui
            .add_enabled(!movie.stream_url.is_empty(), watch)
            .on_hover_text(movie.stream_url.as_str())
            .clicked()
        {
            action = Some(UiAction::Watch(movie.stream_url.clone()));
        }

        if !movie.download_url.is_empty() {
            ui.hyperlink_to("⬇ Download", &movie.download_url);
        }

        ui.add_space(12.0);
        if ui.link("Back to Movie List").clicked() {
            action = Some(UiAction::Back);
        }
    });

    action
}
