#[cfg(target_os = "windows")]
fn main() {
    use winresource::WindowsResource;

    let mut res = WindowsResource::new();
    if std::path::Path::new("res/rworkhours.ico").exists() {
        res.set_icon("res/rworkhours.ico");
    }
    res.set("FileDescription", "rWorkHours CLI")
        .set("ProductName", "rWorkHours")
        .set("OriginalFilename", "rworkhours.exe")
        .set("FileVersion", env!("CARGO_PKG_VERSION"))
        .set("ProductVersion", env!("CARGO_PKG_VERSION"))
        .compile()
        .expect("Failed to embed version resource");
}

#[cfg(not(target_os = "windows"))]
fn main() {}
