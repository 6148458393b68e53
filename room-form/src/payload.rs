//! Serialization of the form state into the transport body.

use payloads::requests::RoomMultipart;

use crate::state::RoomForm;

/// Build the multipart body from the current form state. Pure and
/// deterministic; scalar text is trimmed the same way it is validated.
pub fn build_payload(form: &RoomForm) -> RoomMultipart {
    RoomMultipart {
        room_number: form.room_number().trim().to_string(),
        price: form.price().trim().to_string(),
        capacity: form.capacity().trim().to_string(),
        discount: form.discount().trim().to_string(),
        facilities: form.facilities().to_vec(),
        images: form.images().to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::previews::PreviewRegistry;
    use crate::previews::tests::RecordingSource;
    use crate::state::Mode;
    use payloads::requests::PartValue;
    use payloads::{FacilityId, ImageFile};

    fn filled_form() -> RoomForm {
        let mut previews = PreviewRegistry::new(RecordingSource::default());
        let mut form = RoomForm::new(Mode::Create);
        form.set_room_number("12A".into());
        form.set_price(" 100 ".into());
        form.set_capacity("4".into());
        form.set_discount("0".into());
        form.toggle_facility(FacilityId("f1".into()));
        form.add_images(
            vec![ImageFile {
                file_name: "room.jpg".into(),
                content_type: "image/jpeg".into(),
                data: vec![9, 9, 9],
            }],
            &mut previews,
        );
        form
    }

    #[test]
    fn payload_reflects_form_state() {
        let form = filled_form();
        let payload = build_payload(&form);

        assert_eq!(payload.room_number, "12A");
        assert_eq!(payload.price, "100");
        assert_eq!(payload.facilities, [FacilityId("f1".into())]);
        assert_eq!(payload.images.len(), 1);

        let parts = payload.parts();
        assert!(parts.contains(&("facilities[]", PartValue::Text("f1"))));
        assert_eq!(
            parts.iter().filter(|(name, _)| *name == "imgs").count(),
            1
        );
    }

    #[test]
    fn identical_state_builds_identical_payloads() {
        let form = filled_form();
        assert_eq!(build_payload(&form), build_payload(&form));
    }
}
