use crate::{FacilityId, ImageFile};
use reqwest::multipart::{Form, Part};
use rust_decimal::Decimal;

/// Validation result for numeric text fields (price, capacity, discount).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumericValidation {
    Valid,
    Empty,
    NotANumber,
    Negative,
}

impl NumericValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Validate a decimal text field such as price or discount.
///
/// Rules:
/// - non-empty after trimming
/// - parses as a decimal number
/// - not negative
pub fn validate_decimal_field(value: &str) -> NumericValidation {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return NumericValidation::Empty;
    }
    match trimmed.parse::<Decimal>() {
        Ok(parsed) if parsed.is_sign_negative() => NumericValidation::Negative,
        Ok(_) => NumericValidation::Valid,
        Err(_) => NumericValidation::NotANumber,
    }
}

/// Validate an integer text field such as capacity.
pub fn validate_integer_field(value: &str) -> NumericValidation {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return NumericValidation::Empty;
    }
    if trimmed.starts_with('-') {
        return NumericValidation::Negative;
    }
    match trimmed.parse::<u32>() {
        Ok(_) => NumericValidation::Valid,
        Err(_) => NumericValidation::NotANumber,
    }
}

/// Multipart-shaped body for creating or updating a room.
///
/// The encoding order is fixed so it is stable across builds: the four
/// scalar fields, then one `facilities[]` entry per selected id, then one
/// `imgs` entry per attachment in selection order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomMultipart {
    pub room_number: String,
    pub price: String,
    pub capacity: String,
    pub discount: String,
    pub facilities: Vec<FacilityId>,
    pub images: Vec<ImageFile>,
}

/// One encoded multipart field, borrowed from a [`RoomMultipart`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartValue<'a> {
    Text(&'a str),
    File { file_name: &'a str, bytes: &'a [u8] },
}

impl RoomMultipart {
    /// The encoded field sequence. Pure and deterministic; used by tests and
    /// mirrored exactly by [`RoomMultipart::into_form`].
    pub fn parts(&self) -> Vec<(&'static str, PartValue<'_>)> {
        let mut parts = vec![
            ("roomNumber", PartValue::Text(&self.room_number)),
            ("price", PartValue::Text(&self.price)),
            ("capacity", PartValue::Text(&self.capacity)),
            ("discount", PartValue::Text(&self.discount)),
        ];
        for facility in &self.facilities {
            parts.push(("facilities[]", PartValue::Text(&facility.0)));
        }
        for image in &self.images {
            parts.push((
                "imgs",
                PartValue::File {
                    file_name: &image.file_name,
                    bytes: &image.data,
                },
            ));
        }
        parts
    }

    /// Convert into a reqwest multipart form, preserving `parts()` order.
    pub fn into_form(self) -> Form {
        let mut form = Form::new()
            .text("roomNumber", self.room_number)
            .text("price", self.price)
            .text("capacity", self.capacity)
            .text("discount", self.discount);
        for facility in self.facilities {
            form = form.text("facilities[]", facility.0);
        }
        for image in self.images {
            let part = Part::bytes(image.data.clone())
                .file_name(image.file_name.clone());
            let part = if image.content_type.is_empty() {
                part
            } else {
                match part.mime_str(&image.content_type) {
                    Ok(with_mime) => with_mime,
                    // Unparseable MIME type from the browser; send untyped.
                    Err(_) => {
                        Part::bytes(image.data).file_name(image.file_name)
                    }
                }
            };
            form = form.part("imgs", part);
        }
        form
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RoomMultipart {
        RoomMultipart {
            room_number: "12A".into(),
            price: "100".into(),
            capacity: "4".into(),
            discount: "0".into(),
            facilities: vec![FacilityId("f1".into()), FacilityId("f2".into())],
            images: vec![
                ImageFile {
                    file_name: "a.jpg".into(),
                    content_type: "image/jpeg".into(),
                    data: vec![1, 2, 3],
                },
                ImageFile {
                    file_name: "b.png".into(),
                    content_type: "image/png".into(),
                    data: vec![4, 5],
                },
            ],
        }
    }

    #[test]
    fn parts_are_ordered_and_deterministic() {
        let body = sample();
        let parts = body.parts();

        let names: Vec<&str> = parts.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            [
                "roomNumber",
                "price",
                "capacity",
                "discount",
                "facilities[]",
                "facilities[]",
                "imgs",
                "imgs"
            ]
        );
        assert_eq!(parts, body.parts());
    }

    #[test]
    fn facilities_encode_one_entry_per_id() {
        let body = sample();
        let ids: Vec<&str> = body
            .parts()
            .into_iter()
            .filter(|(name, _)| *name == "facilities[]")
            .map(|(_, value)| match value {
                PartValue::Text(text) => text,
                PartValue::File { .. } => panic!("facility encoded as file"),
            })
            .collect();
        assert_eq!(ids, ["f1", "f2"]);
    }

    #[test]
    fn images_preserve_selection_order() {
        let body = sample();
        let files: Vec<&str> = body
            .parts()
            .into_iter()
            .filter(|(name, _)| *name == "imgs")
            .map(|(_, value)| match value {
                PartValue::File { file_name, .. } => file_name,
                PartValue::Text(_) => panic!("image encoded as text"),
            })
            .collect();
        assert_eq!(files, ["a.jpg", "b.png"]);
    }

    #[test]
    fn decimal_field_validation() {
        assert!(validate_decimal_field("50").is_valid());
        assert!(validate_decimal_field(" 19.99 ").is_valid());
        assert_eq!(validate_decimal_field(""), NumericValidation::Empty);
        assert_eq!(validate_decimal_field("   "), NumericValidation::Empty);
        assert_eq!(
            validate_decimal_field("abc"),
            NumericValidation::NotANumber
        );
        assert_eq!(validate_decimal_field("-5"), NumericValidation::Negative);
    }

    #[test]
    fn integer_field_validation() {
        assert!(validate_integer_field("4").is_valid());
        assert_eq!(validate_integer_field(""), NumericValidation::Empty);
        assert_eq!(
            validate_integer_field("2.5"),
            NumericValidation::NotANumber
        );
        assert_eq!(validate_integer_field("-1"), NumericValidation::Negative);
    }
}
