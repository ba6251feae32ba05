//! # Pedidos Server
//!
//! The binary is intentionally thin: `cli/` resolves configuration and logging,
//! `server/` maps HTTP onto the `pedidosapp` API facade. Everything that writes the
//! backing document or the upload area lives in the library.
//!
//! ```text
//! GET    /api/pedidos          -> all records
//! POST   /api/pedidos          -> multipart: pedido (JSON) + optional comprobante (file)
//! PUT    /api/pedidos/:id      -> merge fields into the record
//! DELETE /api/pedidos/:id      -> remove every record with that id
//! GET    /uploads/*            -> stored receipts
//! GET    /*                    -> static front end (public_dir)
//! ```

mod cli;
mod server;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
