use colour::red;

pub fn print_intro() {
    println!(
        r#"
                 __ _
       ___  ___ / _| |_ _ __ __ _ _   _
      / __|/ _ \ |_| __| '__/ _` | | | |
      \__ \ (_) |  _| |_| | | (_| | |_| |
      |___/\___/_|  \__|_|  \__,_|\__, |
                                  |___/  "#
    );

    if cfg!(debug_assertions) {
        red!("\nWARNING: YOU ARE RUNNING IN DEBUG MODE. Keep in mind that everything is way slower than it should be.\n\n");
    }
}
