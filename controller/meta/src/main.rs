fn main() {
    multiversx_sc_meta_lib::cli_main::<exen_controller::AbiProvider>();
}
