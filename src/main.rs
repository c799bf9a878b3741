//! Sim Station - manage iOS simulators from the command line
//!
//! This is the binary entry point. All logic lives in the library
//! crates; this file only wires arguments to store calls.

use clap::{Parser, Subcommand};

use simstation_app::{
    ActiveProcessesStore, BatteryStatusStore, CreateSimulatorStore, Environment,
    InstalledApplicationsStore, Settings, SimulatorStore, StationBroadcast,
};
use simstation_core::prelude::*;
use simstation_core::{BatteryChargeState, Loadable, Simulator, SimulatorState};
use simstation_shell::commands::UpdateLocationCommand;
use simstation_shell::{ShellCommand, ToolAvailability};

/// Sim Station - manage iOS simulators from the command line
#[derive(Parser, Debug)]
#[command(name = "simstation")]
#[command(about = "Manage iOS simulators from the command line", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand, Debug)]
enum CliCommand {
    /// List known simulators grouped by OS
    List,
    /// Boot a simulator and open the Simulator app
    Boot { udid: String },
    /// Shut down a simulator
    Shutdown { udid: String },
    /// Erase a simulator's content and settings
    Erase { udid: String },
    /// Delete a simulator
    Delete { udid: String },
    /// Create a simulator
    Create {
        name: String,
        /// Device-type identifier or display name
        #[arg(long)]
        device_type: String,
        /// Runtime identifier or display name
        #[arg(long)]
        runtime: String,
    },
    /// List available runtimes
    Runtimes,
    /// Show the status-bar battery state
    Battery { udid: String },
    /// Override the status-bar battery state
    SetBattery {
        udid: String,
        /// charged, charging, or discharging
        #[arg(long)]
        state: String,
        /// 0..=100
        #[arg(long)]
        level: i64,
    },
    /// List installed (non-system) applications
    Apps { udid: String },
    /// List processes running inside a simulator
    Processes { udid: String },
    /// Set the simulated location
    Location {
        udid: String,
        latitude: f64,
        longitude: f64,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    let args = Args::parse();

    color_eyre::install()?;
    let settings = Settings::load();
    simstation_core::logging::init(settings.log_filter.as_deref())?;

    let tools = ToolAvailability::check().await;
    if let Some(message) = tools.simctl_unavailable_message() {
        eprintln!("⚠️  {message}");
    }

    let env = Environment::live();

    match args.command {
        CliCommand::List => list(env).await?,
        CliCommand::Boot { udid } => set_state(env, &udid, SimulatorState::Booted).await?,
        CliCommand::Shutdown { udid } => set_state(env, &udid, SimulatorState::Shutdown).await?,
        CliCommand::Erase { udid } => {
            simstation_shell::commands::EraseContentCommand::new(&udid)
                .run()
                .await?;
            println!("Erased {udid}");
        }
        CliCommand::Delete { udid } => delete(env, &udid).await?,
        CliCommand::Create {
            name,
            device_type,
            runtime,
        } => create(env, name, &device_type, &runtime).await?,
        CliCommand::Runtimes => runtimes(env).await?,
        CliCommand::Battery { udid } => battery(env, &udid).await?,
        CliCommand::SetBattery { udid, state, level } => {
            set_battery(env, &udid, &state, level).await?
        }
        CliCommand::Apps { udid } => apps(env, &udid).await?,
        CliCommand::Processes { udid } => processes(env, &udid).await?,
        CliCommand::Location {
            udid,
            latitude,
            longitude,
        } => {
            UpdateLocationCommand::new(&udid, latitude, longitude)
                .run()
                .await?;
            println!("Location of {udid} set to {latitude},{longitude}");
        }
    }

    Ok(())
}

async fn retrieved_store(env: Environment) -> Result<SimulatorStore> {
    let store = SimulatorStore::new(env);
    store.retrieve().await?;
    Ok(store)
}

async fn find_simulator(store: &SimulatorStore, udid: &str) -> color_eyre::Result<Simulator> {
    store
        .find(udid)
        .await
        .ok_or_else(|| color_eyre::eyre::eyre!("no simulator with udid {udid}"))
}

async fn list(env: Environment) -> color_eyre::Result<()> {
    let store = retrieved_store(env).await?;

    for (os, devices) in store.snapshot().await {
        println!("{os}");
        for device in devices {
            let state = device
                .state
                .map(|s| s.to_string())
                .unwrap_or_else(|| "—".to_string());
            println!("  {:<10} {}  [{}]", state, device.display_name(), device.id());
        }
    }
    Ok(())
}

async fn set_state(
    env: Environment,
    udid: &str,
    target: SimulatorState,
) -> color_eyre::Result<()> {
    let store = retrieved_store(env).await?;
    let simulator = find_simulator(&store, udid).await?;

    store.set_state(&simulator, target).await?;
    println!("{} is now {}", simulator.display_name(), target);
    Ok(())
}

async fn delete(env: Environment, udid: &str) -> color_eyre::Result<()> {
    let store = retrieved_store(env).await?;
    let simulator = find_simulator(&store, udid).await?;

    store.delete(&simulator).await?;
    println!("Deleted {}", simulator.display_name());
    Ok(())
}

async fn create(
    env: Environment,
    name: String,
    device_type: &str,
    runtime: &str,
) -> color_eyre::Result<()> {
    let broadcast = StationBroadcast::new();
    let store = CreateSimulatorStore::new(env, broadcast);

    store.retrieve_runtimes().await;
    let runtimes = store.runtimes().await;
    let Some(catalog) = runtimes.value() else {
        return Err(report_loadable_error(&runtimes, "runtime catalog"));
    };

    let selected_runtime = catalog
        .iter()
        .find(|r| r.identifier == runtime || r.name == runtime)
        .ok_or_else(|| color_eyre::eyre::eyre!("no runtime matching {runtime:?}"))?;
    let selected_device_type = selected_runtime
        .supported_device_types
        .iter()
        .find(|d| d.identifier == device_type || d.name == device_type)
        .ok_or_else(|| {
            color_eyre::eyre::eyre!(
                "runtime {} does not support device type {device_type:?}",
                selected_runtime.name
            )
        })?;

    store.select_runtime(selected_runtime.clone()).await;
    store.select_device_type(selected_device_type.clone()).await;
    store.set_name(name).await;
    store.create().await;

    match store.creating().await {
        Loadable::Loaded(()) => {
            println!("Simulator created");
            Ok(())
        }
        Loadable::Idle => Err(color_eyre::eyre::eyre!(
            "nothing created: pick a runtime and device type, and use a name longer than 3 characters"
        )),
        other => Err(report_loadable_error(&other, "creation")),
    }
}

async fn runtimes(env: Environment) -> color_eyre::Result<()> {
    let broadcast = StationBroadcast::new();
    let store = CreateSimulatorStore::new(env, broadcast);

    store.retrieve_runtimes().await;
    let runtimes = store.runtimes().await;
    let Some(catalog) = runtimes.value() else {
        return Err(report_loadable_error(&runtimes, "runtime catalog"));
    };

    for runtime in catalog {
        let availability = if runtime.is_available { "" } else { " (unavailable)" };
        println!("{}{availability}", runtime.name);
        println!("  {}", runtime.identifier);
        for device_type in &runtime.supported_device_types {
            println!("    {}  [{}]", device_type.name, device_type.identifier);
        }
    }
    Ok(())
}

async fn battery(env: Environment, udid: &str) -> color_eyre::Result<()> {
    let store = BatteryStatusStore::new(udid, env);
    store.retrieve().await;

    let saved = store.saved().await;
    let Some(state) = saved.value() else {
        return Err(report_loadable_error(&saved, "battery state"));
    };
    println!("{}: {}%", state.charge_state, state.level);
    Ok(())
}

async fn set_battery(
    env: Environment,
    udid: &str,
    state: &str,
    level: i64,
) -> color_eyre::Result<()> {
    let charge_state = BatteryChargeState::ALL
        .into_iter()
        .find(|c| c.as_str() == state)
        .ok_or_else(|| color_eyre::eyre::eyre!("unknown charge state {state:?}"))?;

    let store = BatteryStatusStore::new(udid, env);
    store.set_charge_state(charge_state).await;
    store.set_level(level).await;
    store.apply().await;

    match store.applying().await {
        Loadable::Loaded(()) => {
            println!("Battery of {udid} set to {state} at {level}%");
            Ok(())
        }
        Loadable::Idle => Err(color_eyre::eyre::eyre!(
            "override rejected: level must be 0..=100 and state must not be unknown"
        )),
        other => Err(report_loadable_error(&other, "battery override")),
    }
}

async fn apps(env: Environment, udid: &str) -> color_eyre::Result<()> {
    let store = InstalledApplicationsStore::new(udid, env);
    store.retrieve().await;

    let applications = store.applications().await;
    let Some(applications) = applications.value() else {
        return Err(report_loadable_error(&applications, "application list"));
    };

    for application in applications {
        println!("{}  [{}]", application.display_name, application.identifier);
    }
    Ok(())
}

async fn processes(env: Environment, udid: &str) -> color_eyre::Result<()> {
    let store = ActiveProcessesStore::new(udid, env);
    store.retrieve().await;

    let processes = store.processes().await;
    let Some(processes) = processes.value() else {
        return Err(report_loadable_error(&processes, "process list"));
    };

    for process in processes {
        println!("{:>8}  {:>4}  {}", process.pid, process.status, process.label);
    }
    Ok(())
}

fn report_loadable_error<T>(slot: &Loadable<T>, what: &str) -> color_eyre::eyre::Report {
    match slot.error() {
        Some(e) => color_eyre::eyre::eyre!("failed to load {what}: {e}"),
        None => color_eyre::eyre::eyre!("failed to load {what}"),
    }
}
