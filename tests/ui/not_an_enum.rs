use discriminated_union::discriminated_union;

#[discriminated_union]
pub struct Pet;

fn main() {
    let _pet = Pet;
}
