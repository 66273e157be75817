/// Upper bound on uploaded profile photos.
pub const MAX_PHOTOS: usize = 6;

/// One uploaded photo. The browser-side implementation owns a temporary
/// object URL and revokes it in Drop, so dropping a handle anywhere
/// (removal, overflow discard, wizard teardown) releases the display
/// reference.
pub trait PhotoHandle {
    fn label(&self) -> &str;
    fn preview_url(&self) -> &str;
}

/// Ordered list of at most MAX_PHOTOS photo handles.
#[derive(Default)]
pub struct PhotoSlots {
    slots: Vec<Box<dyn PhotoHandle>>,
}

impl PhotoSlots {
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&dyn PhotoHandle> {
        self.slots.get(index).map(Box::as_ref)
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn PhotoHandle> {
        self.slots.iter().map(Box::as_ref)
    }

    /// Appends the selected handles in order, up to the cap. Excess handles
    /// are dropped on the spot and their display references released.
    /// Returns how many were accepted.
    pub fn add_all(&mut self, selected: Vec<Box<dyn PhotoHandle>>) -> usize {
        let room = MAX_PHOTOS.saturating_sub(self.slots.len());
        let accepted = selected.len().min(room);

        for handle in selected.into_iter().take(room) {
            self.slots.push(handle);
        }

        accepted
    }

    /// Removes the handle at the given position; later handles shift down.
    /// Returns false when the index is out of range.
    pub fn remove(&mut self, index: usize) -> bool {
        if index >= self.slots.len() {
            return false;
        }

        self.slots.remove(index);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct TracedPhoto {
        label: String,
        alive: Rc<Cell<bool>>,
    }

    impl TracedPhoto {
        fn boxed(label: &str) -> (Box<dyn PhotoHandle>, Rc<Cell<bool>>) {
            let alive = Rc::new(Cell::new(true));
            let photo = TracedPhoto {
                label: label.to_string(),
                alive: alive.clone(),
            };
            (Box::new(photo), alive)
        }
    }

    impl PhotoHandle for TracedPhoto {
        fn label(&self) -> &str {
            &self.label
        }

        fn preview_url(&self) -> &str {
            &self.label
        }
    }

    impl Drop for TracedPhoto {
        fn drop(&mut self) {
            self.alive.set(false);
        }
    }

    fn batch(labels: &[&str]) -> (Vec<Box<dyn PhotoHandle>>, Vec<Rc<Cell<bool>>>) {
        let mut handles = vec![];
        let mut flags = vec![];
        for label in labels {
            let (handle, alive) = TracedPhoto::boxed(label);
            handles.push(handle);
            flags.push(alive);
        }
        (handles, flags)
    }

    #[test]
    fn cap_discards_excess_silently() {
        let mut slots = PhotoSlots::default();
        let (first, _) = batch(&["a", "b", "c", "d"]);
        assert_eq!(slots.add_all(first), 4);

        let (second, flags) = batch(&["e", "f", "g", "h"]);
        assert_eq!(slots.add_all(second), 2);
        assert_eq!(slots.len(), 6);

        // accepted handles stay alive, the overflow was released
        assert!(flags[0].get());
        assert!(flags[1].get());
        assert!(!flags[2].get());
        assert!(!flags[3].get());
    }

    #[test]
    fn add_when_full_accepts_nothing() {
        let mut slots = PhotoSlots::default();
        let (first, _) = batch(&["a", "b", "c", "d", "e", "f"]);
        slots.add_all(first);

        let (extra, flags) = batch(&["g"]);
        assert_eq!(slots.add_all(extra), 0);
        assert_eq!(slots.len(), 6);
        assert!(!flags[0].get());
    }

    #[test]
    fn remove_shifts_later_handles_down_and_releases() {
        let mut slots = PhotoSlots::default();
        let (handles, flags) = batch(&["a", "b", "c"]);
        slots.add_all(handles);

        assert!(slots.remove(1));
        assert_eq!(slots.len(), 2);
        assert_eq!(slots.get(0).unwrap().label(), "a");
        assert_eq!(slots.get(1).unwrap().label(), "c");
        assert!(!flags[1].get());
        assert!(flags[0].get());
        assert!(flags[2].get());
    }

    #[test]
    fn remove_out_of_range_is_a_noop() {
        let mut slots = PhotoSlots::default();
        let (handles, _) = batch(&["a"]);
        slots.add_all(handles);

        assert!(!slots.remove(3));
        assert_eq!(slots.len(), 1);
    }

    #[test]
    fn dropping_the_slots_releases_every_handle() {
        let (handles, flags) = batch(&["a", "b"]);
        {
            let mut slots = PhotoSlots::default();
            slots.add_all(handles);
        }
        assert!(flags.iter().all(|alive| !alive.get()));
    }
}
