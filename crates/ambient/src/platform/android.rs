//! Android-specific implementation of the host surface.

use jni::objects::JObject;
use jni::{JNIEnv, JavaVM};

use crate::surface::{HostSurface, ScreenShape};

/// `PackageManager.FEATURE_WATCH`.
const FEATURE_WATCH: &str = "android.hardware.type.watch";
/// `Context.UI_MODE_SERVICE`.
const UI_MODE_SERVICE: &str = "uimode";
/// `Configuration.UI_MODE_TYPE_WATCH`.
const UI_MODE_TYPE_WATCH: i32 = 0x06;

/// Android implementation backed by JNI queries against the app context.
///
/// Uses `Configuration.isScreenRound()` for the display shape and the
/// watch system feature plus `UiModeManager` for device-class detection.
#[derive(Debug, Default)]
pub struct AndroidSurface;

impl AndroidSurface {
    pub fn new() -> Self {
        Self
    }
}

impl HostSurface for AndroidSurface {
    fn shape(&self) -> ScreenShape {
        match with_app_context(is_screen_round) {
            Some(true) => ScreenShape::Round,
            Some(false) => ScreenShape::Square,
            None => {
                tracing::warn!("screen shape query failed, reporting square");
                ScreenShape::Square
            }
        }
    }

    fn is_wear_os(&self) -> bool {
        with_app_context(|env, context| {
            Ok(has_watch_feature(env, context)? || is_watch_ui_mode(env, context)?)
        })
        .unwrap_or_else(|| {
            tracing::warn!("watch detection query failed, reporting false");
            false
        })
    }
}

/// Run a JNI query against the application context.
///
/// Attaches the current thread to the VM and clears any pending Java
/// exception on failure so later queries start clean.
fn with_app_context<T>(
    f: impl FnOnce(&mut JNIEnv, &JObject) -> jni::errors::Result<T>,
) -> Option<T> {
    let ctx = ndk_context::android_context();

    let vm = match unsafe { JavaVM::from_raw(ctx.vm().cast()) } {
        Ok(vm) => vm,
        Err(e) => {
            tracing::warn!("no Java VM available: {e}");
            return None;
        }
    };

    let mut env = match vm.attach_current_thread() {
        Ok(env) => env,
        Err(e) => {
            tracing::warn!("failed to attach JNI thread: {e}");
            return None;
        }
    };

    let context = unsafe { JObject::from_raw(ctx.context().cast()) };

    match f(&mut env, &context) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("JNI query failed: {e}");
            let _ = env.exception_clear();
            None
        }
    }
}

/// `context.getResources().getConfiguration().isScreenRound()`.
fn is_screen_round(env: &mut JNIEnv, context: &JObject) -> jni::errors::Result<bool> {
    let resources = env
        .call_method(
            context,
            "getResources",
            "()Landroid/content/res/Resources;",
            &[],
        )?
        .l()?;

    let configuration = env
        .call_method(
            &resources,
            "getConfiguration",
            "()Landroid/content/res/Configuration;",
            &[],
        )?
        .l()?;

    env.call_method(&configuration, "isScreenRound", "()Z", &[])?.z()
}

/// `context.getPackageManager().hasSystemFeature(FEATURE_WATCH)`.
fn has_watch_feature(env: &mut JNIEnv, context: &JObject) -> jni::errors::Result<bool> {
    let package_manager = env
        .call_method(
            context,
            "getPackageManager",
            "()Landroid/content/pm/PackageManager;",
            &[],
        )?
        .l()?;

    let feature = env.new_string(FEATURE_WATCH)?;
    env.call_method(
        &package_manager,
        "hasSystemFeature",
        "(Ljava/lang/String;)Z",
        &[(&feature).into()],
    )?
    .z()
}

/// `UiModeManager.getCurrentModeType() == UI_MODE_TYPE_WATCH`.
fn is_watch_ui_mode(env: &mut JNIEnv, context: &JObject) -> jni::errors::Result<bool> {
    let service_name = env.new_string(UI_MODE_SERVICE)?;
    let manager = env
        .call_method(
            context,
            "getSystemService",
            "(Ljava/lang/String;)Ljava/lang/Object;",
            &[(&service_name).into()],
        )?
        .l()?;

    if manager.is_null() {
        return Ok(false);
    }

    let mode_type = env
        .call_method(&manager, "getCurrentModeType", "()I", &[])?
        .i()?;

    Ok(mode_type == UI_MODE_TYPE_WATCH)
}
