use orbitquad::AppConfig;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    orbitquad::run_with_config(AppConfig::new().title("Orbiting Quad").size(800, 800));
}
