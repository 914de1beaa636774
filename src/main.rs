fn main() {
    hospital_records_lib::run()
}
