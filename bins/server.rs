use dotenvy::dotenv;
use tracing::{error, info};
use uuid::Uuid;

fn init_logging() {
    // .env first so RUST_LOG and LOG_FORMAT apply
    dotenv().ok();
    common::utils::logging::init_logging_from_env();
    info!(service = "polyclinic", event = "logger_init", "tracing subscriber initialized");
}

fn exit_code(res: Result<anyhow::Result<()>, tokio::task::JoinError>, service_id: Uuid, pid: u32) -> std::process::ExitCode {
    match res {
        Ok(Ok(())) => {
            info!(service = "polyclinic", event = "stop", %service_id, pid, "server stopped normally");
            std::process::ExitCode::SUCCESS
        }
        // already logged by the task
        Ok(Err(_)) => std::process::ExitCode::FAILURE,
        Err(e) => {
            error!(service = "polyclinic", event = "task_join_error", error = %e, "server task join error");
            std::process::ExitCode::FAILURE
        }
    }
}

fn main() -> std::process::ExitCode {
    init_logging();

    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new({
        let service_id = service_id;
        move |info| {
            error!(
                service = "polyclinic",
                event = "panic",
                %service_id,
                pid,
                message = %info,
                "unhandled panic occurred"
            );
        }
    }));

    // config.toml first, then TOKIO_WORKER_THREADS
    let worker_threads = match configs::AppConfig::load_and_validate() {
        Ok(cfg) => cfg.server.worker_threads,
        Err(_) => std::env::var("TOKIO_WORKER_THREADS").ok().and_then(|v| v.parse::<usize>().ok()),
    };

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = worker_threads {
        builder.worker_threads(w);
    }

    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "polyclinic", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return std::process::ExitCode::FAILURE;
        }
    };

    info!(
        service = "polyclinic",
        event = "start",
        %service_id,
        pid,
        version,
        threads = worker_threads.unwrap_or_default(),
        "server starting"
    );

    rt.block_on(async move {
        let mut server_task = tokio::spawn(async move {
            let res = server::run().await;
            if let Err(e) = &res {
                error!(service = "polyclinic", event = "run_failed", error = %e, "server::run returned error");
            }
            res
        });

        tokio::select! {
            res = &mut server_task => exit_code(res, service_id, pid),
            _ = tokio::signal::ctrl_c() => {
                info!(service = "polyclinic", event = "shutdown_signal", %service_id, pid, "received Ctrl+C, waiting for in-flight requests");
                // server::run sees the same signal and drains before returning
                exit_code(server_task.await, service_id, pid)
            }
        }
    })
}
