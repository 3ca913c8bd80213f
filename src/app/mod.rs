use std::path::PathBuf;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use anyhow::Context as _;
use eframe::egui::{self, Context};
use tracing::error;

use crate::controller::{Controller, FilterCriteria};
use crate::launch::{Dataset, SiteSelection, load_dataset};
use crate::view::ChartSpec;

mod bindings;
mod render_utils;
mod ui;

pub const DASHBOARD_TITLE: &str = "SpaceX Launch Records Dashboard";

pub struct LaunchDashApp {
    data_path: PathBuf,
    state: AppState,
}

enum AppState {
    Loading {
        rx: Receiver<Result<Dataset, String>>,
    },
    Ready(Box<ViewModel>),
    Error(String),
}

struct ViewModel {
    controller: Controller,
    site_search: String,
    criteria: FilterCriteria,
    pie_input: SiteSelection,
    scatter_input: FilterCriteria,
    pie: ChartSpec,
    scatter: ChartSpec,
    status: Option<String>,
}

impl LaunchDashApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, data_path: PathBuf) -> Self {
        let state = Self::start_load(data_path.clone());
        Self { data_path, state }
    }

    fn start_load(data_path: PathBuf) -> AppState {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let result = load_dataset(&data_path)
                .context("failed to load launch records")
                .map_err(|error| {
                    error!(path = %data_path.display(), "{error:#}");
                    format!("{error:#}")
                });
            let _ = tx.send(result);
        });

        AppState::Loading { rx }
    }

    fn ready_state(dataset: Dataset) -> AppState {
        match ViewModel::new(Arc::new(dataset)) {
            Ok(model) => AppState::Ready(Box::new(model)),
            Err(error) => AppState::Error(error.to_string()),
        }
    }
}

impl eframe::App for LaunchDashApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let mut transition = None;

        match &mut self.state {
            AppState::Loading { rx } => {
                match rx.try_recv() {
                    Ok(Ok(dataset)) => transition = Some(Self::ready_state(dataset)),
                    Ok(Err(error)) => transition = Some(AppState::Error(error)),
                    Err(TryRecvError::Empty) => {}
                    Err(TryRecvError::Disconnected) => {
                        transition = Some(AppState::Error(
                            "Background load worker disconnected".to_owned(),
                        ));
                    }
                }

                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.add_space(120.0);
                        ui.heading("Loading launch records...");
                        ui.add_space(8.0);
                        ui.spinner();
                    });
                });
            }
            AppState::Error(error) => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.heading("Failed to load launch records");
                    ui.add_space(6.0);
                    ui.label(format!("data file: {}", self.data_path.display()));
                    ui.label(error.as_str());
                    ui.add_space(10.0);
                    if ui.button("Retry").clicked() {
                        transition = Some(Self::start_load(self.data_path.clone()));
                    }
                });
            }
            AppState::Ready(model) => model.show(ctx, &self.data_path),
        }

        if let Some(next_state) = transition {
            self.state = next_state;
        }
    }
}
