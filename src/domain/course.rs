#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub id: String,
    pub name: String,
    pub modules: Vec<CourseModule>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CourseModule {
    pub id: String,
    pub name: String,
}

impl Course {
    pub fn new(id: impl Into<String>, name: impl Into<String>, modules: Vec<CourseModule>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            modules,
        }
    }

    pub fn module(&self, module_id: &str) -> Option<&CourseModule> {
        self.modules.iter().find(|m| m.id == module_id)
    }
}

impl CourseModule {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
