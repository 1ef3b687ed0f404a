fn main() {
    tauri_plugin::Builder::new(&[
        "get_shape",
        "is_wear_os",
        "is_ambient",
        "set_auto_resume_enabled",
        "set_ambient_offload_enabled",
    ])
    .build();
}
