fn main() {
    // The firmware binary links against ESP-IDF; host builds of the library need nothing.
    #[cfg(feature = "esp32")]
    embuild::espidf::sysenv::output();
}
