/// A Python package the generated project needs, and the module used to probe it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DependencyRequirement {
    /// Name passed to `pip install`.
    pub package: &'static str,
    /// Name passed to `import`.
    pub module: &'static str,
}

impl DependencyRequirement {
    pub const fn same(name: &'static str) -> Self {
        Self { package: name, module: name }
    }
}

/// Libraries used by the analysis script and dashboard, probed in this order.
pub const REQUIRED_DEPENDENCIES: [DependencyRequirement; 6] = [
    DependencyRequirement::same("pandas"),
    DependencyRequirement::same("numpy"),
    DependencyRequirement::same("matplotlib"),
    DependencyRequirement::same("seaborn"),
    DependencyRequirement::same("plotly"),
    DependencyRequirement::same("streamlit"),
];

/// Snippet run after installation to confirm the core libraries actually work.
pub const SMOKE_TEST_SNIPPET: &str = r#"import pandas as pd
test_df = pd.DataFrame({'test': [1, 2, 3]})
assert len(test_df) == 3
print('pandas ok')

import matplotlib
matplotlib.use('Agg')
import matplotlib.pyplot as plt
fig, ax = plt.subplots()
ax.plot([1, 2, 3])
plt.close(fig)
print('matplotlib ok')

import streamlit
print('streamlit ok')
"#;
