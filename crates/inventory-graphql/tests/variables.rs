use inventory_graphql::{FileInput, FileType};
use serde_json::json;

#[test]
fn test_input_embeds_as_mutation_variables() {
    let input = FileInput::builder()
        .file_name("site-photo.jpg")
        .store_key("store/site-photo.jpg")
        .size_in_bytes(204_800)
        .file_type(FileType::Image)
        .mime_type("image/jpeg")
        .build()
        .unwrap();

    let body = json!({
        "query": "mutation AddFile($input: FileInput!) { addFile(input: $input) { id } }",
        "variables": { "input": input.to_variables() },
    });

    assert_eq!(
        body["variables"]["input"],
        json!({
            "fileName": "site-photo.jpg",
            "storeKey": "store/site-photo.jpg",
            "sizeInBytes": 204_800,
            "fileType": "IMAGE",
            "mimeType": "image/jpeg",
        })
    );
}

#[test]
fn test_round_trip_through_wire_json() {
    let mut input = FileInput::new("minutes.txt", "store/minutes.txt");
    input.upload_time = Some(1_712_000_000);
    input.file_type = Some(FileType::File);

    let wire = serde_json::to_string(&input).unwrap();
    let decoded: FileInput = serde_json::from_str(&wire).unwrap();

    assert_eq!(decoded, input);
}
