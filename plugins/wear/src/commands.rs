use tauri::{command, State};
use wear_ambient::{AmbientError, ScreenShape};

use crate::{Result, SharedState};

#[command]
pub async fn get_shape(state: State<'_, SharedState>) -> Result<ScreenShape> {
    let bridge = state.lock().await;
    Ok(bridge.get_shape()?)
}

#[command]
pub async fn is_wear_os(state: State<'_, SharedState>) -> Result<bool> {
    let bridge = state.lock().await;
    Ok(bridge.is_wear_os()?)
}

#[command]
pub async fn is_ambient(state: State<'_, SharedState>) -> Result<bool> {
    let bridge = state.lock().await;
    Ok(bridge.is_ambient()?)
}

#[command]
pub async fn set_auto_resume_enabled(
    state: State<'_, SharedState>,
    enabled: Option<bool>,
) -> Result<()> {
    let enabled = enabled.ok_or(AmbientError::MissingArgument("enabled"))?;
    let mut bridge = state.lock().await;
    Ok(bridge.set_auto_resume_enabled(enabled)?)
}

#[command]
pub async fn set_ambient_offload_enabled(
    state: State<'_, SharedState>,
    enabled: Option<bool>,
) -> Result<()> {
    let enabled = enabled.ok_or(AmbientError::MissingArgument("enabled"))?;
    let mut bridge = state.lock().await;
    Ok(bridge.set_ambient_offload_enabled(enabled)?)
}
