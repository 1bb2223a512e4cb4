pub mod configuration;

pub mod math {
    pub mod function {
        pub mod function;
        pub mod countingfunction;
    }

    pub mod differentiation {
        pub mod differentiator;
    }

    pub mod integration {
        pub mod integrationerror;
        pub mod gausslegendretable;
        pub mod integrator;
    }

    pub mod polynomial {
        pub mod factorial;
        pub mod legendrepolynomial;
    }

    pub mod sampling {
        pub mod point2d;
        pub mod sampler;
    }
}
