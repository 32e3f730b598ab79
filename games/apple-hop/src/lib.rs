pub mod controller;
pub mod game;
pub mod scene;
pub mod scoring;

use game::AppleHop;

hopper_web::export_game!(AppleHop, "apple-hop");
