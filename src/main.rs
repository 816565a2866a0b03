fn main() {
    agent_stack::app::logging::init_from_env();
    agent_stack::app::cli::run();
}
