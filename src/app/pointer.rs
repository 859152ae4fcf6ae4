/// Mouse or touch state in canvas coordinates, with memory of the previous frame.
#[derive(Clone, Default, Debug)]
pub struct Pointer {
    previous: Option<Box<Pointer>>,
    location: (i32, i32),
    pub button: bool,
    pressed: bool,
}

impl Pointer {
    pub fn new() -> Pointer {
        Pointer {
            ..Default::default()
        }
    }

    /// Pressed this frame but not the previous one, or pressed and released since the last frame.
    pub fn clicked(&self) -> bool {
        self.pressed
            || match &self.previous {
                Some(pointer) => self.button && !pointer.button,
                None => self.button,
            }
    }

    pub fn press(&mut self) {
        self.button = true;
        self.pressed = true;
    }

    pub fn release(&mut self) {
        self.button = false;
    }

    pub fn swap(&mut self) {
        self.pressed = false;
        self.previous.take(); // Must explicitly drop old Pointer from heap
        self.previous = Some(Box::new(self.clone()));
    }

    pub fn location(&self) -> (i32, i32) {
        self.location
    }

    pub fn set_location(&mut self, location: (i32, i32)) {
        self.location = location;
    }
}
