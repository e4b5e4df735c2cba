use anyhow::{Context, Result};
use emu_input::engine::input::platform::WinitInput;
use emu_input::engine::input::{
    ActionKind, BindingSnapshot, Dispatch, InputManager, InputMode, InputSettings, NavRole,
    RebindOutcome,
};
use emu_input::engine::system::{FrontendKey, SystemKind, SYSTEM_KEY_MAP_START};
use glam::UVec2;
use log::{error, info};
use std::path::Path;
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

const SETTINGS_PATH: &str = "input_settings.json";
const BINDINGS_PATH: &str = "bindings.json";

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting input demo...");

    let settings = InputSettings::load(Path::new(SETTINGS_PATH))
        .with_context(|| format!("reading {}", SETTINGS_PATH))?;
    let mut manager = InputManager::new(SystemKind::Gba.create(), settings);

    if Path::new(BINDINGS_PATH).exists() {
        let snapshot = BindingSnapshot::load(Path::new(BINDINGS_PATH))
            .with_context(|| format!("reading {}", BINDINGS_PATH))?;
        manager.load_bindings(&snapshot);
    }

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Input Demo")
        .with_inner_size(winit::dpi::LogicalSize::new(960, 640))
        .with_resizable(true)
        .build(&event_loop)?;

    let size = window.inner_size();
    manager.set_view_size(UVec2::new(size.width, size.height));

    let mut input = WinitInput::new();
    input.attach(&mut manager)?;

    info!("Menu: Enter to play, PageDown to rebind A, PageUp to unbind all keys");

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested, saving bindings...");
                if let Err(e) = manager.save_bindings().save(Path::new(BINDINGS_PATH)) {
                    error!("Failed to save bindings: {}", e);
                }
                elwt.exit();
            }
            Event::WindowEvent { event, .. } => {
                let Some(dispatch) = input.process_window_event(&mut manager, &event) else {
                    return;
                };
                match (manager.mode(), dispatch) {
                    (_, Dispatch::Rebind(outcome)) => {
                        info!("Rebind: {:?}", outcome);
                        if let RebindOutcome::Bound { key, code, class, .. } = outcome {
                            info!(
                                "{} is now on {}",
                                manager.key_name(key).unwrap_or("?"),
                                manager.button_name(class, code)
                            );
                        }
                    }
                    (InputMode::Menu, Dispatch::Navigate(NavRole::Confirm)) => {
                        info!("Entering gameplay");
                        manager.set_mode(InputMode::Gameplay);
                    }
                    (InputMode::Menu, Dispatch::Navigate(NavRole::PageDown)) => {
                        if let Some(kb) = input.keyboard() {
                            // GBA "A"
                            if let Err(e) = manager.start_capture(kb, SYSTEM_KEY_MAP_START + 10) {
                                error!("Cannot start capture: {}", e);
                            }
                        }
                    }
                    (InputMode::Menu, Dispatch::Navigate(NavRole::PageUp)) => {
                        if let Some(kb) = input.keyboard() {
                            if let Err(e) = manager.request_unbind_all(kb) {
                                error!("Cannot unbind: {}", e);
                            }
                        }
                    }
                    (InputMode::Menu, Dispatch::Navigate(NavRole::Cancel)) => {
                        elwt.exit();
                    }
                    (
                        InputMode::Gameplay,
                        Dispatch::Frontend {
                            key: FrontendKey::OpenMenu,
                            action: ActionKind::Pushed,
                        },
                    ) => {
                        info!("Back to menu");
                        manager.set_mode(InputMode::Menu);
                    }
                    (InputMode::Gameplay, Dispatch::Emulated { .. }) => {
                        info!("Register: {:#06x}", manager.register());
                    }
                    _ => {}
                }
            }
            Event::AboutToWait => {
                // One emulated frame per loop iteration
                manager.end_frame();
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
