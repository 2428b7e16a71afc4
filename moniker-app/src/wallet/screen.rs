use tokio::time::timeout;

use moniker_types::view::ViewState;

use crate::context::AppContext;
use crate::error::AppError;
use crate::view_model::RenameWalletOutput;

/// Grace period on top of the resolver's own request timeout.
const SETTLE_GRACE: std::time::Duration = std::time::Duration::from_secs(1);

/// Wait until the screen has something final to show after an appear.
///
/// Returns the first view state, or the latest one once an ENS lookup still
/// in flight settles.
pub async fn settled_view_state(
    ctx: &AppContext,
    output: &mut RenameWalletOutput,
) -> Result<ViewState, AppError> {
    let mut state = output
        .view_state
        .recv()
        .await
        .ok_or(AppError::ScreenClosed)?;

    if *output.ens_resolved.borrow() {
        // Settled already; anything it produced is queued behind `state`.
        while let Ok(next) = output.view_state.try_recv() {
            state = next;
        }
        return Ok(state);
    }
    if !ctx.resolution_enabled {
        return Ok(state);
    }

    match timeout(ctx.resolution_timeout + SETTLE_GRACE, output.view_state.recv()).await {
        Ok(Some(next)) => Ok(next),
        Ok(None) => Ok(state),
        Err(_) => {
            tracing::debug!("ens lookup did not settle in time");
            Ok(state)
        }
    }
}
