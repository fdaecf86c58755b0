use std::sync::Arc;

use markdown_image_uploader::{
    PluginSettings, ReqwestTransport, UploadDispatcher, UploadRequest, UploadTransport,
};

/// Command-line companion to the editor plugin: uploads one image file to a
/// configured host and prints the hosted URL.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let (host_id, path) = match (args.next(), args.next()) {
        (Some(host_id), Some(path)) => (host_id, path),
        _ => {
            eprintln!("usage: markdown-image-uploader <host> <image-file>");
            eprintln!("hosts: imgur, smms, cloudinary, lsky");
            std::process::exit(2);
        }
    };

    log::info!("[MAIN] Uploading {} to {}", path, host_id);

    let settings = PluginSettings::load()?;
    let host_settings = settings.host_settings(&host_id);

    let bytes = tokio::fs::read(&path).await?;

    let transport = Arc::new(ReqwestTransport::new()) as Arc<dyn UploadTransport>;
    let dispatcher = UploadDispatcher::build(transport);

    match dispatcher
        .dispatch(UploadRequest::from_bytes(host_id, bytes), &host_settings)
        .await
    {
        Ok(hosted_url) => {
            println!("{}", hosted_url);
            Ok(())
        }
        Err(error) => {
            log::error!("[MAIN] Upload failed: {}", error);
            eprintln!("upload failed: {}", error);
            std::process::exit(1);
        }
    }
}
