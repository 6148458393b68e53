//! Form state for the room editor: field values, validation errors, and the
//! create/edit mode.

use std::collections::BTreeMap;

use payloads::requests::{
    NumericValidation, validate_decimal_field, validate_integer_field,
};
use payloads::{FacilityId, ImageFile, RoomId, responses};

use crate::previews::{PreviewRegistry, PreviewSource};

/// Whether the editor creates a new room or updates an existing one.
///
/// Decided once when the form is constructed and fixed for its lifetime.
/// Edit carries the target id so nothing downstream has to reach back into
/// navigation state for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Create,
    Edit(RoomId),
}

/// The form's named field slots. Each has exactly one validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    RoomNumber,
    Price,
    Capacity,
    Discount,
    Facilities,
    Images,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::RoomNumber,
        Field::Price,
        Field::Capacity,
        Field::Discount,
        Field::Facilities,
        Field::Images,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Field::RoomNumber => "Room Number",
            Field::Price => "Price",
            Field::Capacity => "Capacity",
            Field::Discount => "Discount",
            Field::Facilities => "Facilities",
            Field::Images => "Images",
        }
    }
}

/// Per-field error messages, rendered inline next to the offending field.
/// A field's entry is replaced (or cleared) each time that field is
/// re-validated; other fields' entries are untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<Field, String>,
}

impl ValidationErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    fn set(&mut self, field: Field, error: Option<String>) {
        match error {
            Some(message) => {
                self.errors.insert(field, message);
            }
            None => {
                self.errors.remove(&field);
            }
        }
    }
}

/// State of the room editor form.
///
/// Two steady states: pristine (`dirty == false`, nothing edited since
/// construction or seeding) and dirty. The `submitting` flag is orthogonal
/// and owned by the submission coordinator.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomForm {
    mode: Mode,
    room_number: String,
    price: String,
    capacity: String,
    discount: String,
    facilities: Vec<FacilityId>,
    images: Vec<ImageFile>,
    errors: ValidationErrors,
    dirty: bool,
    submitting: bool,
}

impl RoomForm {
    /// An empty form. Create mode uses this directly.
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            room_number: String::new(),
            price: String::new(),
            capacity: String::new(),
            discount: String::new(),
            facilities: Vec::new(),
            images: Vec::new(),
            errors: ValidationErrors::default(),
            dirty: false,
            submitting: false,
        }
    }

    /// An edit-mode form seeded from a stored record. Seeding populates the
    /// scalar fields and the facility id set but does not mark the form
    /// dirty; the record's stored images stay server-side and never enter
    /// the local `images` sequence.
    pub fn seeded(room: &responses::Room) -> Self {
        let mut form = Self::new(Mode::Edit(room.id.clone()));
        form.room_number = room.room_number.clone();
        form.price = room.price.clone();
        form.capacity = room.capacity.clone();
        form.discount = room.discount.clone();
        for facility in &room.facilities {
            if !form.facilities.contains(&facility.id) {
                form.facilities.push(facility.id.clone());
            }
        }
        form
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn room_number(&self) -> &str {
        &self.room_number
    }

    pub fn price(&self) -> &str {
        &self.price
    }

    pub fn capacity(&self) -> &str {
        &self.capacity
    }

    pub fn discount(&self) -> &str {
        &self.discount
    }

    /// Selected facility ids in selection order, deduplicated.
    pub fn facilities(&self) -> &[FacilityId] {
        &self.facilities
    }

    /// Newly selected image files in selection order.
    pub fn images(&self) -> &[ImageFile] {
        &self.images
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub(crate) fn set_submitting(&mut self, submitting: bool) {
        self.submitting = submitting;
    }

    pub fn set_room_number(&mut self, value: String) {
        self.set_text(Field::RoomNumber, value);
    }

    pub fn set_price(&mut self, value: String) {
        self.set_text(Field::Price, value);
    }

    pub fn set_capacity(&mut self, value: String) {
        self.set_text(Field::Capacity, value);
    }

    pub fn set_discount(&mut self, value: String) {
        self.set_text(Field::Discount, value);
    }

    fn set_text(&mut self, field: Field, value: String) {
        match field {
            Field::RoomNumber => self.room_number = value,
            Field::Price => self.price = value,
            Field::Capacity => self.capacity = value,
            Field::Discount => self.discount = value,
            Field::Facilities | Field::Images => unreachable!(),
        }
        self.dirty = true;
        self.revalidate(field);
    }

    /// Toggle a facility: a selected id is removed, an unselected one is
    /// appended. Re-selecting an already-present id never duplicates it.
    pub fn toggle_facility(&mut self, id: FacilityId) {
        if let Some(position) =
            self.facilities.iter().position(|selected| *selected == id)
        {
            self.facilities.remove(position);
        } else {
            self.facilities.push(id);
        }
        self.dirty = true;
        self.revalidate(Field::Facilities);
    }

    /// Replace the facility selection wholesale, keeping the first
    /// occurrence of each id.
    pub fn set_facilities(&mut self, ids: Vec<FacilityId>) {
        self.facilities.clear();
        for id in ids {
            if !self.facilities.contains(&id) {
                self.facilities.push(id);
            }
        }
        self.dirty = true;
        self.revalidate(Field::Facilities);
    }

    /// Append newly selected files, registering one preview handle each.
    pub fn add_images<S: PreviewSource>(
        &mut self,
        files: Vec<ImageFile>,
        previews: &mut PreviewRegistry<S>,
    ) {
        for file in files {
            previews.register(&file);
            self.images.push(file);
        }
        self.dirty = true;
        self.revalidate(Field::Images);
    }

    /// Remove one image and release its preview handle.
    pub fn remove_image<S: PreviewSource>(
        &mut self,
        index: usize,
        previews: &mut PreviewRegistry<S>,
    ) {
        if index >= self.images.len() {
            return;
        }
        self.images.remove(index);
        previews.release_at(index);
        self.dirty = true;
        self.revalidate(Field::Images);
    }

    /// Drop the whole selection, releasing every preview handle.
    pub fn clear_images<S: PreviewSource>(
        &mut self,
        previews: &mut PreviewRegistry<S>,
    ) {
        self.images.clear();
        previews.release_all();
        self.dirty = true;
        self.revalidate(Field::Images);
    }

    /// Run every field rule and return the aggregate. Submission is blocked
    /// while this is non-empty.
    pub fn validate_all(&mut self) -> &ValidationErrors {
        for field in Field::ALL {
            self.revalidate(field);
        }
        &self.errors
    }

    fn revalidate(&mut self, field: Field) {
        let error = self.validate_field(field);
        self.errors.set(field, error);
    }

    fn validate_field(&self, field: Field) -> Option<String> {
        match field {
            Field::RoomNumber => {
                if self.room_number.trim().is_empty() {
                    Some("Room Number is required".to_string())
                } else {
                    None
                }
            }
            Field::Price => {
                numeric_error(field, validate_decimal_field(&self.price))
            }
            Field::Capacity => {
                numeric_error(field, validate_integer_field(&self.capacity))
            }
            Field::Discount => {
                numeric_error(field, validate_decimal_field(&self.discount))
            }
            Field::Facilities => {
                if self.facilities.is_empty() {
                    Some("At least one facility is required".to_string())
                } else {
                    None
                }
            }
            // Stored images remain server-side on edit, so an empty local
            // selection is only an error when creating.
            Field::Images => match self.mode {
                Mode::Create if self.images.is_empty() => {
                    Some("At least one image is required".to_string())
                }
                _ => None,
            },
        }
    }
}

fn numeric_error(
    field: Field,
    validation: NumericValidation,
) -> Option<String> {
    let label = field.label();
    match validation {
        NumericValidation::Valid => None,
        NumericValidation::Empty => Some(format!("{label} is required")),
        NumericValidation::NotANumber => {
            Some(format!("{label} must be a number"))
        }
        NumericValidation::Negative => {
            Some(format!("{label} cannot be negative"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::previews::PreviewRegistry;
    use crate::previews::tests::RecordingSource;
    use payloads::responses::FacilityOption;

    fn facility(id: &str, name: &str) -> FacilityOption {
        FacilityOption {
            id: FacilityId(id.to_string()),
            name: name.to_string(),
        }
    }

    fn seed_room() -> responses::Room {
        responses::Room {
            id: RoomId("r1".into()),
            room_number: "101".into(),
            price: "50".into(),
            capacity: "2".into(),
            discount: "10".into(),
            facilities: vec![facility("f1", "Wifi"), facility("f2", "Pool")],
            images: vec!["https://cdn/rooms/r1-0.jpg".into()],
        }
    }

    #[test]
    fn seeding_populates_without_marking_dirty() {
        let form = RoomForm::seeded(&seed_room());

        assert_eq!(form.room_number(), "101");
        assert_eq!(form.price(), "50");
        assert_eq!(form.capacity(), "2");
        assert_eq!(form.discount(), "10");
        assert_eq!(
            form.facilities(),
            [FacilityId("f1".into()), FacilityId("f2".into())]
        );
        assert!(form.images().is_empty());
        assert!(!form.is_dirty());
        assert_eq!(form.mode(), &Mode::Edit(RoomId("r1".into())));
    }

    #[test]
    fn first_edit_marks_dirty() {
        let mut form = RoomForm::seeded(&seed_room());
        form.set_price("55".into());
        assert!(form.is_dirty());
    }

    #[test]
    fn per_field_validation_updates_only_that_field() {
        let mut form = RoomForm::new(Mode::Create);
        form.validate_all();
        assert_eq!(form.errors().len(), 6);

        form.set_room_number("12A".into());
        assert!(form.errors().get(Field::RoomNumber).is_none());
        // Everything else still flagged.
        assert_eq!(form.errors().len(), 5);
    }

    #[test]
    fn numeric_fields_reject_garbage() {
        let mut form = RoomForm::new(Mode::Create);
        form.set_price("abc".into());
        assert_eq!(
            form.errors().get(Field::Price),
            Some("Price must be a number")
        );
        form.set_capacity("-1".into());
        assert_eq!(
            form.errors().get(Field::Capacity),
            Some("Capacity cannot be negative")
        );
        form.set_price("19.99".into());
        assert!(form.errors().get(Field::Price).is_none());
    }

    #[test]
    fn facility_toggle_deduplicates() {
        let mut form = RoomForm::new(Mode::Create);
        form.toggle_facility(FacilityId("f1".into()));
        form.toggle_facility(FacilityId("f2".into()));
        form.set_facilities(vec![
            FacilityId("f1".into()),
            FacilityId("f2".into()),
            FacilityId("f1".into()),
        ]);
        assert_eq!(
            form.facilities(),
            [FacilityId("f1".into()), FacilityId("f2".into())]
        );

        // Toggling off removes; toggling back on appends at the end.
        form.toggle_facility(FacilityId("f1".into()));
        assert_eq!(form.facilities(), [FacilityId("f2".into())]);
        form.toggle_facility(FacilityId("f1".into()));
        assert_eq!(
            form.facilities(),
            [FacilityId("f2".into()), FacilityId("f1".into())]
        );
    }

    #[test]
    fn images_required_only_in_create_mode() {
        let mut create = RoomForm::new(Mode::Create);
        create.validate_all();
        assert_eq!(
            create.errors().get(Field::Images),
            Some("At least one image is required")
        );

        let mut edit = RoomForm::seeded(&seed_room());
        edit.validate_all();
        assert!(edit.errors().get(Field::Images).is_none());
    }

    #[test]
    fn image_add_and_remove_keeps_previews_aligned() {
        let source = RecordingSource::default();
        let mut previews = PreviewRegistry::new(source.clone());
        let mut form = RoomForm::new(Mode::Create);

        let file = |name: &str| ImageFile {
            file_name: name.to_string(),
            content_type: "image/jpeg".to_string(),
            data: vec![0u8; 4],
        };

        form.add_images(vec![file("a.jpg"), file("b.jpg")], &mut previews);
        assert_eq!(form.images().len(), 2);
        assert_eq!(previews.handles().len(), 2);
        assert_eq!(source.created(), 2);

        form.remove_image(0, &mut previews);
        assert_eq!(form.images().len(), 1);
        assert_eq!(form.images()[0].file_name, "b.jpg");
        assert_eq!(previews.handles().len(), 1);
        assert_eq!(source.revoked(), 1);

        form.clear_images(&mut previews);
        assert!(form.images().is_empty());
        assert_eq!(source.revoked(), 2);
        assert_eq!(
            form.errors().get(Field::Images),
            Some("At least one image is required")
        );
    }
}
