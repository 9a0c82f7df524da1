/// Resolves once the process receives SIGINT (or SIGTERM on unix).
pub(crate) async fn shutdown()
{
	let sigint = async {
		match tokio::signal::ctrl_c().await {
			Ok(()) => warn!("received SIGINT"),
			Err(error) => error!(%error, "failed to receive SIGINT"),
		}
	};

	#[cfg(unix)]
	let sigterm = async {
		use tokio::signal::unix::{SignalKind, signal};

		match signal(SignalKind::terminate()) {
			Ok(mut sigterm) => {
				sigterm.recv().await;
				warn!("received SIGTERM");
			},
			Err(error) => {
				error!(%error, "failed to install SIGTERM handler");
				std::future::pending::<()>().await;
			},
		}
	};

	#[cfg(not(unix))]
	let sigterm = std::future::pending::<()>();

	tokio::select! {
		() = sigint => {},
		() = sigterm => {},
	}
}
