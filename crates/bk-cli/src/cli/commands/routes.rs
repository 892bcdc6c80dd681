//! `bk routes` – list the static page routes.

use bk_core::routes::ROUTES;

pub fn run_routes() {
    println!("{:<10} {:<10} {}", "PATH", "NAME", "PAGE");
    for r in ROUTES {
        println!("{:<10} {:<10} {:?}", r.path, r.name, r.page);
    }
}
