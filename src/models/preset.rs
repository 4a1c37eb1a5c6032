//! Built-in document sets
//!
//! Each preset describes one interview-question collection: which numbered
//! topic files go into which of the five level files, and the title each
//! level file gets. The tables are plain data handed to the merger.

use super::group_spec::{Group, GroupSpec, SpecError, TitleLabels};
use clap::ValueEnum;

/// Output file names shared by every preset, in processing order
pub const LEVEL_OUTPUTS: [&str; 5] = [
    "01_Basics.md",
    "02_Intermediate.md",
    "03_Advanced.md",
    "04_Senior.md",
    "05_Expert.md",
];

const LEVEL_NAMES: [&str; 5] = ["Basic", "Intermediate", "Advanced", "Senior", "Expert"];

const JAVA_LEVELS: [&[&str]; 5] = [
    &[
        "01_Java_Core_Basics.md",
        "04_Java_Fundamentals_Core.md",
        "06_OOP_Basics.md",
        "14_SOLID_Arrays_Basics.md",
        "15_Strings_Basics.md",
        "31_Spring_Boot_Basics_Revision.md",
    ],
    &[
        "03_Exceptions_And_IO.md",
        "07_OOP_Basics_Practice.md",
        "08_Exceptions_IO_Practice.md",
        "09_Java_Fundamentals_Practice.md",
        "16_Data_Structures_Collections.md",
        "18_Java_Programs_Numbers.md",
        "19_Java_Programs_Arrays.md",
        "20_Java_Programs_Strings.md",
        "21_Java_Programs_Patterns_OOP.md",
        "25_Arrays_And_Strings_Revision.md",
        "26_Data_Structures_Intermediate_Revision.md",
    ],
    &[
        "02_Spring_And_Advanced_Java.md",
        "05_Modern_Java_And_Patterns.md",
        "10_Modern_Java_And_Patterns_Practice.md",
        "17_Data_Structures_Streams_Advanced.md",
        "22_Java_Programs_Collections_Advanced.md",
        "23_Java_Programs_Advanced_SQL.md",
        "27_Data_Structures_Advanced_Algorithms.md",
        "28_Spring_Boot_3_Advanced.md",
        "29_Spring_Boot_Config_REST.md",
        "34_Spring_Boot_Architecture_Config.md",
    ],
    &[
        "24_Mixed_Concepts_Patterns_DB_Testing.md",
        "30_Spring_Boot_Data_Security.md",
        "35_Spring_Boot_REST_CLI_MongoDB.md",
        "37_Spring_Boot_Internals_Testing.md",
        "38_Spring_Boot_Deployment_Security_JPA.md",
        "39_Spring_Boot_Security_Testing_JPA_Revision.md",
        "40_Spring_MVC_Security_WebFlux_Revision.md",
    ],
    &[
        "11_Concurrency_Practice.md",
        "12_Extra_Concepts_Practice.md",
        "13_Advanced_Concurrency_JVM_Practice.md",
        "32_Spring_Core_Monitoring_WebFlux.md",
        "33_Messaging_Kafka_Docker_Kubernetes.md",
        "36_Spring_Boot_NoSQL_Integration_Cloud.md",
    ],
];

const GOLANG_LEVELS: [&[&str]; 5] = [
    &[
        "01_Basics.md",
        "02_Arrays_Slices_Maps.md",
        "03_Pointers_Interfaces_Methods.md",
        "12_Files_OS_System.md",
        "51_Modern_Go_Features.md",
    ],
    &[
        "04_Concurrency.md",
        "08_Networking_WebDev.md",
        "09_Databases_ORMs.md",
        "10_Tools_Testing_Ecosystem.md",
        "23_CLI_Automation.md",
        "28_Testing.md",
        "40_Tooling_DevExp.md",
        "42_Testing_Part2.md",
        "47_Databases_Part2.md",
    ],
    &[
        "05_Advanced_BestPractices.md",
        "06_ProjectStructure_DesignPatterns.md",
        "07_Generics_AdvancedTypes.md",
        "11_Performance_Optimization.md",
        "14_Security_BestPractices.md",
        "15_Testing_Strategy.md",
        "22_ErrorHandling_Observability.md",
        "26_Security.md",
        "27_Performance_Optimization.md",
        "29_API_Design_REST_gRPC.md",
        "30_DesignPatterns_Part2.md",
        "31_Advanced_Concurrency.md",
        "38_ErrorHandling_Part2.md",
        "41_Security_Part2.md",
        "43_Performance_Part2.md",
        "45_Refactoring_Design.md",
        "49_Concurrency_Patterns_Part2.md",
    ],
    &[
        "13_Microservices_gRPC.md",
        "17_DevOps_Containers.md",
        "18_Streaming_Async.md",
        "19_Architecture_SystemDesign.md",
        "20_Troubleshooting_Debugging.md",
        "32_EventDriven_Messaging.md",
        "33_DevOps_Infrastructure.md",
        "34_Caching_Storage.md",
        "48_API_Microservices_Part2.md",
    ],
    &[
        "16_Go_Internals.md",
        "21_Networking_LowLevel.md",
        "24_AI_MachineLearning.md",
        "25_WASM_Blockchain.md",
        "35_RealTime_IoT.md",
        "36_Go_Internals.md",
        "37_Network_Protocol_DeepDive.md",
        "39_Streaming_DataPipelines.md",
        "44_Compiler_Theory.md",
        "46_AI_ML_Part2.md",
        "50_Tooling_Maintenance_Part2.md",
        "52_Niche_Patterns.md",
    ],
];

/// A compiled-in document set
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    Java,
    Golang,
}

impl Preset {
    pub fn all() -> [Preset; 2] {
        [Preset::Java, Preset::Golang]
    }

    /// Language name used in titles
    pub fn language(self) -> &'static str {
        match self {
            Preset::Java => "Java",
            Preset::Golang => "Golang",
        }
    }

    fn levels(self) -> &'static [&'static [&'static str]; 5] {
        match self {
            Preset::Java => &JAVA_LEVELS,
            Preset::Golang => &GOLANG_LEVELS,
        }
    }

    pub fn group_spec(self) -> Result<GroupSpec, SpecError> {
        let groups = LEVEL_OUTPUTS
            .iter()
            .zip(self.levels().iter())
            .map(|(output, sources)| Group::new(*output, sources.iter().copied()))
            .collect();
        GroupSpec::new(groups)
    }

    /// "Basic Level Java Interview Questions" and so on
    pub fn titles(self) -> TitleLabels {
        LEVEL_OUTPUTS
            .iter()
            .zip(LEVEL_NAMES.iter())
            .map(|(output, level)| {
                (
                    *output,
                    format!("{} Level {} Interview Questions", level, self.language()),
                )
            })
            .collect()
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Preset::Java => write!(f, "java"),
            Preset::Golang => write!(f, "golang"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid_specs() {
        for preset in Preset::all() {
            let spec = preset.group_spec().unwrap();
            assert_eq!(spec.len(), 5);
            let outputs: Vec<_> = spec.groups().iter().map(|g| g.output.as_str()).collect();
            assert_eq!(outputs, LEVEL_OUTPUTS.to_vec());
        }
    }

    #[test]
    fn test_java_source_counts() {
        let spec = Preset::Java.group_spec().unwrap();
        let counts: Vec<_> = spec.groups().iter().map(|g| g.sources.len()).collect();
        assert_eq!(counts, vec![6, 11, 10, 7, 6]);
        assert_eq!(spec.source_count(), 40);
    }

    #[test]
    fn test_golang_basics_consumes_previous_basics_file() {
        let spec = Preset::Golang.group_spec().unwrap();
        let basics = &spec.groups()[0];
        assert_eq!(basics.output, "01_Basics.md");
        assert_eq!(basics.sources[0], "01_Basics.md");
    }

    #[test]
    fn test_titles() {
        let titles = Preset::Java.titles();
        assert_eq!(
            titles.get("01_Basics.md"),
            Some("Basic Level Java Interview Questions")
        );
        let titles = Preset::Golang.titles();
        assert_eq!(
            titles.get("05_Expert.md"),
            Some("Expert Level Golang Interview Questions")
        );
    }
}
